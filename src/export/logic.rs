// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_employees, table_sql};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EmployeeExport;
use crate::export::sql_dump::export_sql;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the `Employes` table to `file`.
    ///
    /// - `format`: csv | json | sql
    /// - `force`: overwrite an existing file without asking
    pub fn export(pool: &DbPool, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rows: Vec<EmployeeExport> = load_employees(&pool.conn)?
            .iter()
            .map(EmployeeExport::from)
            .collect();

        if rows.is_empty() {
            warning("Aucun employé à exporter.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Sql => {
                let create_sql = table_sql(&pool.conn)?.ok_or_else(|| {
                    AppError::Export("table Employes introuvable".to_string())
                })?;
                export_sql(&create_sql, &rows, path)
            }
        }
    }
}
