use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{create_db, edemo, setup_test_db};

#[test]
fn test_show_prints_rows() {
    let db_path = setup_test_db("show_rows");
    create_db(&db_path);

    edemo()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("5   Eve          Semaine 39    8h-14h    6          28.20"))
        .stdout(contains("Total: 5 employés"))
        .stdout(contains("Structure de la table").not());
}

#[test]
fn test_schema_marks_required_columns() {
    let db_path = setup_test_db("schema_required");
    create_db(&db_path);

    edemo()
        .args(["--db", &db_path, "schema"])
        .assert()
        .success()
        .stdout(contains("Colonne              Type            Obligatoire"))
        .stdout(contains("ID                   INTEGER         Oui"))
        .stdout(contains("employes             TEXT            Oui"))
        .stdout(contains("feuille_temps        TEXT            Oui"))
        .stdout(contains("horaire              TEXT            Oui"))
        .stdout(contains("anciennete           INTEGER         Oui"))
        .stdout(contains("taux_horaire         DECIMAL(5,2)    Oui"))
        .stdout(contains("date_creation        DATETIME        Non"))
        .stdout(contains("date_modification    DATETIME        Non"));
}

#[test]
fn test_show_on_missing_database() {
    let db_path = setup_test_db("show_missing");

    edemo()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("La base de données n'existe pas."));
}

#[test]
fn test_schema_on_missing_database() {
    let db_path = setup_test_db("schema_missing");

    edemo()
        .args(["--db", &db_path, "schema"])
        .assert()
        .success()
        .stdout(contains("Veuillez l'exécuter d'abord."));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    create_db(&db_path);

    edemo()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Employes"))
        .stdout(contains("Intégrité vérifiée."));
}
