// src/export/sql_dump.rs

use crate::errors::AppResult;
use crate::export::{EmployeeExport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::formatting::sql_quote;
use std::fs;
use std::path::Path;

const INSERT_COLUMNS: &str =
    "ID, employes, feuille_temps, horaire, anciennete, taux_horaire, date_creation, date_modification";

/// Build a self-contained script that recreates the table and its rows.
pub(crate) fn render_dump(create_sql: &str, rows: &[EmployeeExport]) -> String {
    let mut out = String::from("BEGIN TRANSACTION;\n");
    out.push_str(create_sql.trim());
    out.push_str(";\n");

    for r in rows {
        out.push_str(&format!(
            "INSERT INTO Employes ({INSERT_COLUMNS}) VALUES ({}, {}, {}, {}, {}, {}, {}, {});\n",
            r.id,
            sql_quote(&r.employes),
            sql_quote(&r.feuille_temps),
            sql_quote(&r.horaire),
            r.anciennete,
            r.taux_horaire,
            sql_quote(&r.date_creation),
            sql_quote(&r.date_modification),
        ));
    }

    out.push_str("COMMIT;\n");
    out
}

pub(crate) fn export_sql(create_sql: &str, rows: &[EmployeeExport], path: &Path) -> AppResult<()> {
    info(format!("Export SQL vers: {}", path.display()));

    fs::write(path, render_dump(create_sql, rows))?;

    notify_export_success("SQL", path);
    Ok(())
}
