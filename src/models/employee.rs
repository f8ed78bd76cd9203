use chrono::NaiveDateTime;
use serde::Serialize;

/// Format SQLite uses for `CURRENT_TIMESTAMP` (UTC, second precision).
pub const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the `Employes` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,                      // ⇔ Employes.ID (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub name: String,                 // ⇔ Employes.employes
    pub timesheet_period: String,     // ⇔ Employes.feuille_temps
    pub schedule: String,             // ⇔ Employes.horaire
    pub seniority_years: i64,         // ⇔ Employes.anciennete
    pub hourly_rate: f64,             // ⇔ Employes.taux_horaire (DECIMAL(5,2))
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,    // ⇔ Employes.date_creation
    #[serde(serialize_with = "serialize_timestamp")]
    pub updated_at: NaiveDateTime,    // ⇔ Employes.date_modification
}

impl Employee {
    /// Hourly rate as currency text with two decimals.
    pub fn rate_display(&self) -> String {
        format!("{:.2}", self.hourly_rate)
    }
}

/// A seed tuple, before the database assigns id and timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewEmployee {
    pub name: &'static str,
    pub timesheet_period: &'static str,
    pub schedule: &'static str,
    pub seniority_years: i64,
    pub hourly_rate: f64,
}

fn serialize_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&ts.format(SQLITE_TIMESTAMP_FORMAT))
}
