// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether the output file may be created or overwritten.
///
/// - file absent → Ok
/// - file present and `force` → Ok
/// - file present without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("Le fichier '{}' existe déjà.", path.display()));

    print!("Écraser? [o/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_lowercase();

    if matches!(ans.as_str(), "o" | "oui" | "y" | "yes") {
        info("Le fichier existant sera écrasé.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export annulé: fichier existant non écrasé".to_string(),
        ))
    }
}
