//! Runtime schema discovery for the standalone viewer.
//!
//! Nothing here knows about the customer table: the first user table in the
//! file is found through `sqlite_master`, its columns through
//! `PRAGMA table_xinfo`, and every cell is rendered to text.

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::error::DbError;

/// Why a table could not be discovered.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Database file not found: {}", .0.display())]
    DatabaseMissing(PathBuf),

    #[error("No tables found in {}", .0.display())]
    NoUserTable(PathBuf),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<rusqlite::Error> for DiscoveryError {
    fn from(err: rusqlite::Error) -> Self {
        DiscoveryError::Db(DbError::from(err))
    }
}

/// One column as reported by `PRAGMA table_xinfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub primary_key: bool,
}

/// A discovered table with all of its rows rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTable {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<String>>,
}

impl DiscoveredTable {
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

/// Open `path` read-only and load its first user table.
///
/// A missing file is reported, not created.
pub fn discover_first_table(path: &Path) -> Result<DiscoveredTable, DiscoveryError> {
    if !path.exists() {
        return Err(DiscoveryError::DatabaseMissing(path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    let name = first_user_table(&conn)?
        .ok_or_else(|| DiscoveryError::NoUserTable(path.to_path_buf()))?;
    let columns = discover_columns(&conn, &name)?;
    let rows = read_rows(&conn, &name, &columns)?;
    debug!(table = %name, columns = columns.len(), rows = rows.len(), "Table discovered");

    conn.close().map_err(|(_, err)| DiscoveryError::from(err))?;

    Ok(DiscoveredTable { name, columns, rows })
}

/// First table in creation order, skipping SQLite's internal tables.
pub fn first_user_table(conn: &Connection) -> rusqlite::Result<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
         LIMIT 1",
    )?;
    let mut rows = stmt.query([])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

/// Ordered column descriptors for `table`, generated columns included.
///
/// `table_xinfo` marks virtual-table hidden columns with `hidden = 1`; those
/// are skipped. Generated columns (`hidden` 2 or 3) are kept.
pub fn discover_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<ColumnDescriptor>> {
    let sql = format!("PRAGMA table_xinfo({})", quote_identifier(table));
    let mut stmt = conn.prepare(&sql)?;
    let columns = stmt
        .query_map([], |row| {
            let hidden: i64 = row.get(6)?;
            Ok((
                hidden,
                ColumnDescriptor {
                    name: row.get(1)?,
                    declared_type: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    not_null: row.get::<_, i64>(3)? != 0,
                    primary_key: row.get::<_, i64>(5)? != 0,
                },
            ))
        })?
        .filter_map(|item| match item {
            Ok((1, _)) => None,
            Ok((_, column)) => Some(Ok(column)),
            Err(err) => Some(Err(err)),
        })
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

/// Read every row, selecting the discovered columns by name so each cell
/// lines up with its header.
fn read_rows(
    conn: &Connection,
    table: &str,
    columns: &[ColumnDescriptor],
) -> rusqlite::Result<Vec<Vec<String>>> {
    let width = columns.len();
    let select_list = columns
        .iter()
        .map(|c| quote_identifier(&c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("SELECT {} FROM {}", select_list, quote_identifier(table));
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(width);
        for idx in 0..width {
            cells.push(render_value(row.get_ref(idx)?));
        }
        out.push(cells);
    }
    Ok(out)
}

/// Text form of a cell. NULL renders as empty text.
pub fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(v) => v.to_string(),
        ValueRef::Real(v) => v.to_string(),
        ValueRef::Text(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ValueRef::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

/// Double-quote an identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
