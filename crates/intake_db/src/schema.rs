//! Table definition for the customer store.
//!
//! Pure DDL, no business logic. `CREATE TABLE IF NOT EXISTS` keeps this safe
//! to run on every startup.

use rusqlite::Connection;
use tracing::debug;

use crate::error::Result;

/// `preferred_contact` is constrained by the store itself so rows written
/// around the form still cannot carry other values.
pub const CUSTOMERS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birthday TEXT,
    email TEXT,
    phone TEXT,
    address TEXT,
    preferred_contact TEXT CHECK(preferred_contact IN ('Email','Phone','Mail')),
    created_at TEXT DEFAULT CURRENT_TIMESTAMP
)"#;

/// Create the customer table if it doesn't exist.
pub fn create_customer_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(CUSTOMERS_DDL)?;
    debug!("customers table created/verified");
    Ok(())
}
