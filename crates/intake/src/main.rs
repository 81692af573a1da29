//! Intake launcher
//!
//! One binary for the entry form, the table viewer and the console helpers
//! that read or write the same customer database.

use clap::{Parser, Subcommand};
use intake_logging::{init_logging, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

mod cli;

use cli::add::AddArgs;
use cli::config::{ConfigArgs, DATABASE_ENV};
use cli::list::ListArgs;

#[derive(Parser, Debug)]
#[command(name = "intake", version, about = "Customer data-entry form and table viewer")]
struct Cli {
    /// Enable verbose logging on the console
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// SQLite database file (default: customers.db in the working directory)
    #[arg(long, global = true, env = DATABASE_ENV)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the entry form with the recently submitted grid
    Form,

    /// Open the generic viewer on the first table of the database
    Viewer,

    /// Print every stored customer, one line each
    Dump,

    /// Print stored customers as a table, most recent first
    List(ListArgs),

    /// Submit one customer from the command line
    Add(AddArgs),

    /// Show resolved paths
    Config(ConfigArgs),
}

impl Commands {
    fn is_tui(&self) -> bool {
        matches!(self, Commands::Form | Commands::Viewer)
    }

    fn wants_json(&self) -> bool {
        match self {
            Commands::List(args) => args.json,
            Commands::Add(args) => args.json,
            Commands::Config(args) => args.json,
            _ => false,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = cli.command.wants_json();

    // Logging is best effort; a read-only home must not block the form.
    if let Err(err) = init_logging(LogConfig {
        app_name: "intake",
        verbose: cli.verbose,
        tui_mode: cli.command.is_tui(),
    }) {
        eprintln!("Warning: failed to initialize logging: {:#}", err);
    }

    let database = cli::config::database_path(cli.database.as_deref());
    debug!(path = %database.display(), "Resolved database path");

    let result = match cli.command {
        Commands::Form => cli::tui::run_form(&database),
        Commands::Viewer => cli::tui::run_viewer(&database),
        Commands::Dump => cli::dump::run(&database),
        Commands::List(args) => cli::list::run(args, &database),
        Commands::Add(args) => cli::add::run(args, &database),
        Commands::Config(args) => cli::config::run(args, &database),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{:#}", err);
            info!(error = %message, "Command failed");
            if json_mode {
                cli::error::print_json_error(&err);
            } else if let Some(helpful) = err.downcast_ref::<cli::HelpfulError>() {
                eprint!("{}", helpful);
            } else {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
