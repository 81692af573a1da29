//! SQLite-backed customer store.
//!
//! Every operation opens its own connection and releases it before
//! returning; nothing is held open between user actions.

use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DbError, Result};
use crate::schema;
use crate::types::{Customer, NewCustomer};

const SELECT_CUSTOMERS: &str = "SELECT id, name, birthday, email, phone, address, \
     preferred_contact, created_at FROM customers";

/// Persistence seam used by the form controller and the bound viewer.
pub trait CustomerStore {
    /// Write one row and return its id.
    fn insert(&self, customer: &NewCustomer) -> Result<i64>;

    /// All rows, most recently inserted first.
    fn list_all(&self) -> Result<Vec<Customer>>;
}

/// Handle to the customer database file.
///
/// Cheap to clone: it only carries the path.
#[derive(Debug, Clone)]
pub struct CustomerDb {
    path: PathBuf,
}

impl CustomerDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open (creating if needed) and make sure the customer table exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let db = Self::new(path);
        db.ensure_schema()?;
        info!(path = %db.path.display(), "Customer database ready");
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Idempotently create the customer table.
    pub fn ensure_schema(&self) -> Result<()> {
        self.with_connection(schema::create_customer_table)
    }

    /// Run `f` on a fresh read-write connection.
    ///
    /// The connection is closed before this returns, on success through
    /// `Connection::close` so close errors surface, on failure by drop.
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.path)?;
        let value = f(&conn)?;
        conn.close().map_err(|(_, err)| DbError::from(err))?;
        Ok(value)
    }

    /// Run `f` on a read-only connection to an existing file.
    ///
    /// Never creates the file.
    pub fn with_existing<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        if !self.path.exists() {
            return Err(DbError::NotFound(self.path.clone()));
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        let value = f(&conn)?;
        conn.close().map_err(|(_, err)| DbError::from(err))?;
        Ok(value)
    }

    /// All rows in natural storage order. Requires an existing file.
    pub fn list_natural(&self) -> Result<Vec<Customer>> {
        self.with_existing(|conn| query_customers(conn, SELECT_CUSTOMERS))
    }
}

impl CustomerStore for CustomerDb {
    fn insert(&self, customer: &NewCustomer) -> Result<i64> {
        let id = self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO customers (name, birthday, email, phone, address, preferred_contact) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    customer.name,
                    customer.birthday,
                    customer.email,
                    customer.phone,
                    customer.address,
                    customer.preferred_contact.as_str(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        info!(id, "Customer inserted");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Customer>> {
        let rows = self.with_connection(|conn| {
            query_customers(conn, &format!("{} ORDER BY id DESC", SELECT_CUSTOMERS))
        })?;
        debug!(count = rows.len(), "Customers loaded");
        Ok(rows)
    }
}

fn query_customers(conn: &Connection, sql: &str) -> Result<Vec<Customer>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], row_to_customer)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn row_to_customer(row: &Row<'_>) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        birthday: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        preferred_contact: row.get(6)?,
        created_at: row.get(7)?,
    })
}
