// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod sql_dump;

pub use logic::ExportLogic;
pub use model::EmployeeExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("Export {label} terminé: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Sql,
}
