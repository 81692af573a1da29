//! `intake list`: the bound grid as a console table, most recent first.

use anyhow::Result;
use intake::viewer::{CustomerTableSource, GridSource};
use intake_db::{CustomerDb, CustomerStore};
use std::path::Path;

use crate::cli::error::HelpfulError;
use crate::cli::output::print_table;

/// Arguments for the list command
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show at most this many rows
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

pub fn run(args: ListArgs, database: &Path) -> Result<()> {
    let db = CustomerDb::new(database);
    if !db.exists() {
        return Err(HelpfulError::database_not_found(database).into());
    }

    if args.json {
        let mut customers = db
            .list_all()
            .map_err(|err| HelpfulError::database_unreadable(database, &err.to_string()))?;
        if let Some(limit) = args.limit {
            customers.truncate(limit);
        }
        println!("{}", serde_json::to_string_pretty(&customers)?);
        return Ok(());
    }

    let mut grid = CustomerTableSource::new(db)
        .load_grid()
        .map_err(|err| HelpfulError::database_unreadable(database, &err.to_string()))?;
    if let Some(limit) = args.limit {
        grid.rows.truncate(limit);
    }

    if grid.is_empty() {
        println!("No customers yet.");
        return Ok(());
    }

    let headers: Vec<&str> = grid.columns.iter().map(String::as_str).collect();
    print_table(&headers, grid.rows);
    Ok(())
}
