use crate::db::initialize::create_schema;
use crate::models::NewEmployee;
use rusqlite::{Connection, Transaction, params};

/// Demonstration records, inserted in this order (ids 1..=5).
pub const EMPLOYEES: [NewEmployee; 5] = [
    NewEmployee {
        name: "Lisa-Marie",
        timesheet_period: "Semaine 39",
        schedule: "8h-16h",
        seniority_years: 2,
        hourly_rate: 23.50,
    },
    NewEmployee {
        name: "Noemie",
        timesheet_period: "Semaine 39",
        schedule: "9h-17h",
        seniority_years: 5,
        hourly_rate: 26.70,
    },
    NewEmployee {
        name: "Nadia",
        timesheet_period: "Semaine 39",
        schedule: "7h-15h",
        seniority_years: 1,
        hourly_rate: 22.00,
    },
    NewEmployee {
        name: "Sarah",
        timesheet_period: "Semaine 39",
        schedule: "10h-18h",
        seniority_years: 4,
        hourly_rate: 25.00,
    },
    NewEmployee {
        name: "Eve",
        timesheet_period: "Semaine 39",
        schedule: "8h-14h",
        seniority_years: 6,
        hourly_rate: 28.20,
    },
];

/// Insert every seed record with one prepared statement.
/// Returns the number of inserted rows.
pub fn seed_employees(tx: &Transaction<'_>) -> rusqlite::Result<usize> {
    let mut stmt = tx.prepare_cached(
        "INSERT INTO Employes (employes, feuille_temps, horaire, anciennete, taux_horaire)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    let mut inserted = 0;
    for e in &EMPLOYEES {
        inserted += stmt.execute(params![
            e.name,
            e.timesheet_period,
            e.schedule,
            e.seniority_years,
            e.hourly_rate,
        ])?;
    }

    Ok(inserted)
}

/// Create the table and insert the seed records in one transaction.
///
/// Nothing is committed unless both steps succeed: an early return drops
/// the transaction, which rolls it back.
pub fn create_and_seed(conn: &mut Connection) -> rusqlite::Result<usize> {
    let tx = conn.transaction()?;
    create_schema(&tx)?;
    let inserted = seed_employees(&tx)?;
    tx.commit()?;
    Ok(inserted)
}
