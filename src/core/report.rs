use crate::db::pool::DbPool;
use crate::db::queries::{load_columns, load_employees};
use crate::errors::AppResult;
use crate::models::{ColumnInfo, Employee};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub const MISSING_DATABASE: &str = "La base de données n'existe pas. Veuillez l'exécuter d'abord.";

const DATA_RULE_WIDTH: usize = 80;
const SCHEMA_RULE_WIDTH: usize = 60;

pub struct ReportLogic;

impl ReportLogic {
    /// Data table followed by the `Total` line.
    pub fn render_employees(employees: &[Employee]) -> String {
        let mut table = Table::new(
            vec![
                Column::new("ID", 3),
                Column::new("Employé", 12),
                Column::new("Feuille temps", 13),
                Column::new("Horaire", 9),
                Column::new("Ancienneté", 10),
                Column::new("Taux horaire", 12),
            ],
            '=',
            DATA_RULE_WIDTH,
        );

        for e in employees {
            table.add_row(vec![
                e.id.to_string(),
                e.name.clone(),
                e.timesheet_period.clone(),
                e.schedule.clone(),
                e.seniority_years.to_string(),
                e.rate_display(),
            ]);
        }

        let mut out = table.render();
        out.push_str(&format!("Total: {} employés\n", employees.len()));
        out
    }

    pub fn render_structure(columns: &[ColumnInfo]) -> String {
        let mut table = Table::new(
            vec![
                Column::new("Colonne", 20),
                Column::new("Type", 15),
                Column::new("Obligatoire", 12),
            ],
            '-',
            SCHEMA_RULE_WIDTH,
        );

        for c in columns {
            table.add_row(vec![
                c.name.clone(),
                c.decl_type.clone(),
                c.required_label().to_string(),
            ]);
        }

        format!("Structure de la table Employes:\n{}", table.render())
    }

    /// Print every row of an existing database.
    pub fn print_employees(db_path: &str) -> AppResult<()> {
        let Some(pool) = open_existing(db_path)? else {
            println!("{MISSING_DATABASE}");
            return Ok(());
        };

        let employees = load_employees(&pool.conn)?;
        print!("{}", Self::render_employees(&employees));
        Ok(())
    }

    /// Print the column layout of an existing database.
    pub fn print_structure(db_path: &str) -> AppResult<()> {
        let Some(pool) = open_existing(db_path)? else {
            println!("{MISSING_DATABASE}");
            return Ok(());
        };

        let columns = load_columns(&pool.conn)?;
        println!();
        print!("{}", Self::render_structure(&columns));
        Ok(())
    }
}

/// Read-only handle on `db_path`, or `None` when the file is absent.
fn open_existing(db_path: &str) -> AppResult<Option<DbPool>> {
    if !Path::new(db_path).exists() {
        return Ok(None);
    }
    Ok(Some(DbPool::read_only(db_path)?))
}
