use predicates::str::contains;
use std::fs;

mod common;
use common::{create_db, edemo, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    create_db(&db_path);

    let out = temp_out("export_csv", "csv");

    edemo()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "ID,employes,feuille_temps,horaire,anciennete,taux_horaire,date_creation,date_modification"
        )
    );
    assert!(content.contains("1,Lisa-Marie,Semaine 39,8h-16h,2,23.50,"));
    assert!(content.contains("5,Eve,Semaine 39,8h-14h,6,28.20,"));
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    create_db(&db_path);

    let out = temp_out("export_json", "json");

    edemo()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1]["employes"], "Noemie");
    assert_eq!(rows[1]["taux_horaire"], "26.70");
    assert_eq!(rows[4]["ID"], 5);
}

#[test]
fn test_export_sql_dump_reimports() {
    let db_path = setup_test_db("export_sql");
    create_db(&db_path);

    let out = temp_out("export_sql", "sql");

    edemo()
        .args(["--db", &db_path, "export", "--format", "sql", "--file", &out])
        .assert()
        .success();

    let dump = fs::read_to_string(&out).expect("read exported sql");
    assert!(dump.starts_with("BEGIN TRANSACTION;"));
    assert!(dump.trim_end().ends_with("COMMIT;"));

    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(&dump).expect("dump replays");
    let names: Vec<String> = conn
        .prepare("SELECT employes FROM Employes ORDER BY ID")
        .unwrap()
        .query_map([], |r| r.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(names, ["Lisa-Marie", "Noemie", "Nadia", "Sarah", "Eve"]);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_force");
    create_db(&db_path);

    let out = temp_out("export_no_force", "csv");
    fs::write(&out, "keep me").unwrap();

    edemo()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export annulé"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    edemo()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().contains("Lisa-Marie"));
}

#[test]
fn test_export_without_database_fails() {
    let db_path = setup_test_db("export_missing_db");
    let out = temp_out("export_missing_db", "csv");

    edemo()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("La base de données n'existe pas."));
}
