//! employes-demo main entrypoint.

use employes_demo::run;
use employes_demo::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Erreur: {}", e));
        std::process::exit(1);
    }
}
