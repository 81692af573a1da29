//! Intake: customer data-entry form, table viewers and record dump.
//!
//! The library half holds everything that does not draw to a terminal:
//! field validation, the form controller and the table viewer sources.

pub mod form;
pub mod validate;
pub mod viewer;

pub use form::{FormController, FormField, FormState, SubmitError, SUCCESS_MESSAGE};
pub use validate::{validate, ValidationError};
pub use viewer::{
    BoundViewer, CustomerTableSource, DiscoveredTableSource, GenericViewer, GridSource, TableGrid,
    TableViewer, ViewerError, ViewerState,
};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "customers.db";
