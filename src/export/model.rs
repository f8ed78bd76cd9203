// src/export/model.rs

use crate::models::Employee;
use crate::models::employee::SQLITE_TIMESTAMP_FORMAT;
use serde::Serialize;

/// Flat record written by the CSV and JSON exporters.
/// Field names match the SQL columns so files re-import cleanly.
#[derive(Serialize, Clone, Debug)]
pub struct EmployeeExport {
    #[serde(rename = "ID")]
    pub id: i64,
    pub employes: String,
    pub feuille_temps: String,
    pub horaire: String,
    pub anciennete: i64,
    pub taux_horaire: String,
    pub date_creation: String,
    pub date_modification: String,
}

impl From<&Employee> for EmployeeExport {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            employes: e.name.clone(),
            feuille_temps: e.timesheet_period.clone(),
            horaire: e.schedule.clone(),
            anciennete: e.seniority_years,
            taux_horaire: e.rate_display(),
            date_creation: e.created_at.format(SQLITE_TIMESTAMP_FORMAT).to_string(),
            date_modification: e.updated_at.format(SQLITE_TIMESTAMP_FORMAT).to_string(),
        }
    }
}
