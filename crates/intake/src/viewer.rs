//! Table viewer: one refreshable grid, two ways of filling it.
//!
//! The bound source always reads the customer table through the record
//! store. The discovered source opens whatever file it is pointed at and
//! renders its first user table. Both produce a [`TableGrid`], so the
//! terminal UI draws them the same way.

use intake_db::{
    discover_first_table, CustomerStore, DbError, DiscoveryError, CUSTOMER_COLUMNS,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Ordered column names plus ordered rows of rendered cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableGrid {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Store(#[from] DbError),
}

/// Anything that can produce a grid on demand.
pub trait GridSource {
    fn load_grid(&self) -> Result<TableGrid, ViewerError>;
}

/// What the viewer currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerState {
    /// Grid populated, or legitimately empty.
    Ready(TableGrid),
    /// Status message explaining why there is no grid.
    Error(String),
}

pub struct TableViewer<S> {
    source: S,
    state: ViewerState,
}

impl<S: GridSource> TableViewer<S> {
    /// A viewer that has not loaded anything yet shows an empty grid.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ViewerState::Ready(TableGrid::default()),
        }
    }

    /// Build and immediately refresh.
    pub fn open(source: S) -> Self {
        let mut viewer = Self::new(source);
        viewer.refresh();
        viewer
    }

    /// Re-read the source and replace everything on display.
    pub fn refresh(&mut self) -> &ViewerState {
        self.state = match self.source.load_grid() {
            Ok(grid) => {
                debug!(rows = grid.rows.len(), title = %grid.title, "Viewer refreshed");
                ViewerState::Ready(grid)
            }
            Err(err) => {
                warn!(error = %err, "Viewer refresh failed");
                ViewerState::Error(err.to_string())
            }
        };
        &self.state
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn grid(&self) -> Option<&TableGrid> {
        match &self.state {
            ViewerState::Ready(grid) => Some(grid),
            ViewerState::Error(_) => None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Ready(_) => None,
            ViewerState::Error(message) => Some(message),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Fixed-schema source over the customer table, most recent first.
#[derive(Debug, Clone)]
pub struct CustomerTableSource<S> {
    store: S,
}

impl<S: CustomerStore> CustomerTableSource<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: CustomerStore> GridSource for CustomerTableSource<S> {
    fn load_grid(&self) -> Result<TableGrid, ViewerError> {
        let rows = self.store.list_all()?;
        Ok(TableGrid {
            title: "Recently Submitted".to_string(),
            columns: CUSTOMER_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(|c| c.to_cells()).collect(),
        })
    }
}

/// Source that discovers its table and columns at every refresh.
#[derive(Debug, Clone)]
pub struct DiscoveredTableSource {
    path: PathBuf,
}

impl DiscoveredTableSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSource for DiscoveredTableSource {
    fn load_grid(&self) -> Result<TableGrid, ViewerError> {
        let table = discover_first_table(&self.path)?;
        Ok(TableGrid {
            title: table.name.clone(),
            columns: table.column_names(),
            rows: table.rows,
        })
    }
}

pub type BoundViewer<S> = TableViewer<CustomerTableSource<S>>;
pub type GenericViewer = TableViewer<DiscoveredTableSource>;

#[cfg(test)]
mod tests {
    use super::*;
    use intake_db::{ContactMethod, CustomerDb, NewCustomer};
    use tempfile::TempDir;

    #[test]
    fn test_new_viewer_is_ready_and_empty() {
        let viewer = TableViewer::new(DiscoveredTableSource::new("/nonexistent/never.db"));
        assert_eq!(viewer.grid().map(|g| g.is_empty()), Some(true));
        assert_eq!(viewer.status(), None);
    }

    #[test]
    fn test_generic_missing_file_reports_status() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nothing.db");

        let mut viewer = TableViewer::new(DiscoveredTableSource::new(&path));
        viewer.refresh();

        let status = viewer.status().unwrap();
        assert!(status.contains("not found"), "{}", status);
        assert!(viewer.grid().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_refresh_transitions_between_states() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("customers.db");
        let mut viewer = TableViewer::new(DiscoveredTableSource::new(&path));

        assert!(matches!(viewer.refresh(), ViewerState::Error(_)));

        let db = CustomerDb::open(&path).unwrap();
        assert!(matches!(viewer.refresh(), ViewerState::Ready(grid) if grid.is_empty()));

        db.insert(&NewCustomer::new("Ada", ContactMethod::Email)).unwrap();
        let grid = match viewer.refresh() {
            ViewerState::Ready(grid) => grid.clone(),
            other => panic!("unexpected state: {:?}", other),
        };
        assert_eq!(grid.title, "customers");
        assert_eq!(grid.rows.len(), 1);

        // Back-to-back refreshes are fine.
        viewer.refresh();
        viewer.refresh();
        assert_eq!(viewer.grid().unwrap().rows.len(), 1);
    }

    #[test]
    fn test_bound_viewer_store_error_then_recovers() {
        let tmp = TempDir::new().unwrap();
        let db = CustomerDb::new(tmp.path().join("customers.db"));

        // No schema yet, so the customer query fails.
        let mut viewer = TableViewer::open(CustomerTableSource::new(db.clone()));
        let status = viewer.status().expect("store error is shown as status");
        assert!(status.starts_with("Database error: "), "{}", status);
        assert!(status.contains("customers"), "{}", status);
        assert!(viewer.grid().is_none());

        db.ensure_schema().unwrap();
        db.insert(&NewCustomer::new("Ada", ContactMethod::Email)).unwrap();
        assert!(matches!(viewer.refresh(), ViewerState::Ready(grid) if grid.rows.len() == 1));
        assert_eq!(viewer.status(), None);
    }

    #[test]
    fn test_bound_viewer_column_order() {
        let tmp = TempDir::new().unwrap();
        let db = CustomerDb::open(tmp.path().join("customers.db")).unwrap();
        db.insert(&NewCustomer::new("Ada", ContactMethod::Phone)).unwrap();

        let viewer = TableViewer::open(CustomerTableSource::new(db));
        let grid = viewer.grid().unwrap();
        assert_eq!(
            grid.columns,
            vec!["id", "name", "birthday", "email", "phone", "address", "preferred_contact", "created_at"]
        );
        assert_eq!(grid.rows[0][1], "Ada");
        assert_eq!(grid.rows[0][6], "Phone");
    }
}
