use crate::db::pool::DbPool;
use crate::db::queries::{count_employees, table_names};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• Fichier:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Taille:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TABLES
    //
    let tables = table_names(&pool.conn)?;
    let fmt_tables = if tables.is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        tables.join(", ")
    };
    println!("{}• Tables:{} {}", CYAN, RESET, fmt_tables);

    //
    // 3) ROW COUNT
    //
    if tables.iter().any(|t| t == crate::db::initialize::TABLE_NAME) {
        let count = count_employees(&pool.conn)?;
        println!("{}• Employés:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    }

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check`; SQLite answers `ok` for a sound file.
pub fn integrity_check(pool: &DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(result)
}
