use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const TABLE_NAME: &str = "Employes";

const CREATE_EMPLOYES: &str = r#"
    CREATE TABLE Employes (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        employes TEXT NOT NULL,
        feuille_temps TEXT NOT NULL,
        horaire TEXT NOT NULL,
        anciennete INTEGER NOT NULL,
        taux_horaire DECIMAL(5,2) NOT NULL,
        date_creation DATETIME DEFAULT CURRENT_TIMESTAMP,
        date_modification DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Make room for a fresh database file at `path`.
///
/// Creates the containing directory when missing and removes any file left
/// by a previous run, so the next `open` starts from an empty database.
pub fn prepare_target(path: &Path) -> AppResult<()> {
    // SQLite treats "" as a private temporary database.
    if path.as_os_str().is_empty() {
        return Err(AppError::Config(
            "chemin de base de données vide".to_string(),
        ));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    if path.exists() {
        fs::remove_file(path)?;
    }

    Ok(())
}

/// Create the `Employes` table.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_EMPLOYES)
}
