//! Record store for Intake.
//!
//! One SQLite file, one `customers` table. All interfaces (form, viewer,
//! dump) go through this crate for database access.
//!
//! # Usage
//!
//! ```rust,ignore
//! use intake_db::{ContactMethod, CustomerDb, CustomerStore, NewCustomer};
//!
//! let db = CustomerDb::open("customers.db")?;
//! let id = db.insert(&NewCustomer::new("Ada Lovelace", ContactMethod::Email))?;
//! let newest_first = db.list_all()?;
//! ```

mod error;
mod schema;
mod store;
mod types;

pub mod discovery;

pub use discovery::{discover_first_table, ColumnDescriptor, DiscoveredTable, DiscoveryError};
pub use error::{DbError, Result};
pub use schema::CUSTOMERS_DDL;
pub use store::{CustomerDb, CustomerStore};
pub use types::*;
