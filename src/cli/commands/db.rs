use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::MISSING_DATABASE;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info } = cmd {
        if !Path::new(&cfg.database).exists() {
            println!("{MISSING_DATABASE}");
            return Ok(());
        }

        let pool = DbPool::read_only(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Vérification d'intégrité…{}", CYAN, RESET);

            let integrity = stats::integrity_check(&pool)?;

            if integrity == "ok" {
                println!("{}✔ Intégrité vérifiée.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Échec de la vérification:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
