use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::MISSING_DATABASE;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        if !Path::new(&cfg.database).exists() {
            return Err(AppError::Export(MISSING_DATABASE.to_string()));
        }

        let pool = DbPool::read_only(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, *force)?;
    }

    Ok(())
}
