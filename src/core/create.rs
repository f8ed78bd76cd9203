use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::initialize::prepare_target;
use crate::db::pool::DbPool;
use crate::db::queries::load_employees;
use crate::db::seed::create_and_seed;
use crate::errors::AppResult;
use crate::ui::messages::{failure, header, success};
use std::path::Path;

const ACCESS_HINTS: [&str; 3] = [
    "1. Créez une nouvelle base de données Access (.accdb)",
    "2. Importez la structure et les données depuis le fichier SQL (employes-demo export --format sql)",
    "3. Ajoutez un formulaire pour la modification des données",
];

pub struct CreateLogic;

impl CreateLogic {
    /// Full default run: build the database, then print data and structure.
    ///
    /// Never returns an error for a failed build; the outcome is reported on
    /// stdout and the process exits normally.
    pub fn run(cfg: &Config) -> AppResult<()> {
        header("Création de la base de données des employés", 50);

        if !Self::create_employes_database(&cfg.database) {
            println!();
            failure("Échec de la création de la base de données");
            return Ok(());
        }

        if let Err(e) = ReportLogic::print_structure(&cfg.database) {
            println!("Erreur lors de la lecture de la structure: {e}");
        }

        println!();
        success("Base de données créée avec succès!");

        if cfg.show_access_hints {
            println!("\nPour utiliser cette structure dans Access:");
            for hint in ACCESS_HINTS {
                println!("{hint}");
            }
        }

        Ok(())
    }

    /// Recreate the database at `db_path`, seed it and print its rows.
    /// Returns `false` (after printing the cause) on any failure.
    pub fn create_employes_database(db_path: &str) -> bool {
        match Self::build(db_path) {
            Ok(report) => {
                println!("Base de données créée avec succès: {db_path}");
                println!("Données insérées:");
                println!();
                print!("{report}");
                true
            }
            Err(e) => {
                println!("Erreur lors de la création de la base de données: {e}");
                false
            }
        }
    }

    fn build(db_path: &str) -> AppResult<String> {
        prepare_target(Path::new(db_path))?;

        let mut pool = DbPool::new(db_path)?;
        pool.with_conn(create_and_seed)?;

        let employees = load_employees(&pool.conn)?;
        Ok(ReportLogic::render_employees(&employees))
    }
}
