//! `intake dump`: print every stored customer, one line each, in storage
//! order.

use anyhow::Result;
use intake_db::{CustomerDb, DbError};
use std::path::Path;
use tracing::debug;

use crate::cli::error::HelpfulError;
use crate::cli::output::dump_line;

pub fn run(database: &Path) -> Result<()> {
    let db = CustomerDb::new(database);
    let customers = match db.list_natural() {
        Ok(customers) => customers,
        Err(DbError::NotFound(path)) => return Err(HelpfulError::database_not_found(&path).into()),
        Err(err) => {
            return Err(HelpfulError::database_unreadable(database, &err.to_string()).into());
        }
    };
    debug!(count = customers.len(), "Dumping customers");

    for customer in &customers {
        println!("{}", dump_line(customer));
    }
    Ok(())
}
