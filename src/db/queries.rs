use crate::errors::{AppError, AppResult};
use crate::models::employee::SQLITE_TIMESTAMP_FORMAT;
use crate::models::{ColumnInfo, Employee};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row};

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM Employes ORDER BY ID ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("ID")?,
        name: row.get("employes")?,
        timesheet_period: row.get("feuille_temps")?,
        schedule: row.get("horaire")?,
        seniority_years: row.get("anciennete")?,
        // DECIMAL has NUMERIC affinity: 22.00 comes back as INTEGER 22.
        hourly_rate: row.get("taux_horaire")?,
        created_at: parse_timestamp(row, "date_creation")?,
        updated_at: parse_timestamp(row, "date_modification")?,
    })
}

fn parse_timestamp(row: &Row, column: &str) -> Result<NaiveDateTime> {
    let raw: String = row.get(column)?;

    NaiveDateTime::parse_from_str(&raw, SQLITE_TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Timestamp(raw.clone())),
        )
    })
}

pub fn load_columns(conn: &Connection) -> AppResult<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare("PRAGMA table_info(Employes)")?;

    let rows = stmt.query_map([], |row| {
        Ok(ColumnInfo {
            cid: row.get(0)?,
            name: row.get(1)?,
            decl_type: row.get(2)?,
            not_null: row.get::<_, i64>(3)? != 0,
            default_value: row.get(4)?,
            primary_key: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The `CREATE TABLE` statement SQLite stored for `Employes`.
pub fn table_sql(conn: &Connection) -> AppResult<Option<String>> {
    let sql = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type='table' AND name='Employes'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(sql)
}

pub fn count_employees(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM Employes", [], |row| row.get(0))?;
    Ok(count)
}

/// User tables, i.e. everything but SQLite's internal `sqlite_%` tables.
pub fn table_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type='table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name ASC",
    )?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>>>()?;
    Ok(names)
}
