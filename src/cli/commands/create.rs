use crate::config::Config;
use crate::core::create::CreateLogic;
use crate::errors::AppResult;

/// Handle `create` (also the default when no subcommand is given).
pub fn handle(cfg: &Config) -> AppResult<()> {
    CreateLogic::run(cfg)
}
