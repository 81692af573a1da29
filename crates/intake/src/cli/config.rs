//! Configuration paths for Intake
//!
//! Home and log directories live under ~/.intake/ (override with
//! INTAKE_HOME). The database defaults to `customers.db` in the working
//! directory and is overridden with `--database` or INTAKE_DATABASE.

use std::path::{Path, PathBuf};

pub use intake_logging::{intake_home, logs_dir};

/// Environment variable read by `--database`.
pub const DATABASE_ENV: &str = "INTAKE_DATABASE";

/// Resolve the database path from the global option.
pub fn database_path(cli_value: Option<&Path>) -> PathBuf {
    cli_value
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(intake::DEFAULT_DB_FILE))
}

/// Arguments for the config command
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the config command - shows current paths
pub fn run(args: ConfigArgs, database: &Path) -> anyhow::Result<()> {
    let home = intake_home();
    let logs = logs_dir();

    if args.json {
        let config = serde_json::json!({
            "home": home.to_string_lossy(),
            "database": {
                "path": database.to_string_lossy(),
                "exists": database.exists(),
            },
            "logs": {
                "path": logs.to_string_lossy(),
                "exists": logs.exists(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("INTAKE CONFIGURATION");
        println!("====================");
        println!();
        println!("Home:     {}", home.display());
        println!();
        println!(
            "Database: {} ({})",
            database.display(),
            if database.exists() { "exists" } else { "not found" }
        );
        println!();
        println!("Logs:     {}", logs.display());
        println!(
            "          exists: {}",
            if logs.exists() { "yes" } else { "no" }
        );
    }

    Ok(())
}
