use intake::{FormController, FormField, FormState, SubmitError, ValidationError};
use intake_db::{CustomerDb, CustomerStore};
use rusqlite::Connection;
use tempfile::TempDir;

fn controller_in(tmp: &TempDir) -> FormController<CustomerDb> {
    let db = CustomerDb::open(tmp.path().join("customers.db")).expect("open customer db");
    FormController::new(db)
}

#[test]
fn test_ada_submission_is_first_row_after_refresh() {
    let tmp = TempDir::new().unwrap();
    let mut controller = controller_in(&tmp);
    controller.set_field(FormField::Name, "Ada Lovelace");
    controller.set_field(FormField::Birthday, "1985-12-10");
    controller.set_field(FormField::Email, "ada@example.com");
    controller.set_field(FormField::Phone, "555-1234");
    controller.set_field(FormField::Address, "1 Analytics Way");
    controller.set_field(FormField::PreferredContact, "Email");

    let id = controller.submit().expect("valid submission");

    assert_eq!(controller.form(), &FormState::default());
    let grid = controller.viewer().grid().expect("bound grid is ready");
    let first = &grid.rows[0];
    assert_eq!(first[0], id.to_string());
    assert_eq!(
        &first[1..7],
        &["Ada Lovelace", "1985-12-10", "ada@example.com", "555-1234", "1 Analytics Way", "Email"]
    );
    assert!(!first[7].is_empty(), "created_at is filled by the database");
}

#[test]
fn test_empty_name_inserts_nothing_and_keeps_values() {
    let tmp = TempDir::new().unwrap();
    let mut controller = controller_in(&tmp);
    controller.set_field(FormField::Birthday, "1985-12-10");
    controller.set_field(FormField::Email, "ada@example.com");

    let err = controller.submit().unwrap_err();

    assert!(matches!(err, SubmitError::Validation(ValidationError::NameRequired)));
    assert_eq!(err.to_string(), "Name is required.");
    assert_eq!(controller.form().birthday, "1985-12-10");
    assert_eq!(controller.form().email, "ada@example.com");

    let db = CustomerDb::new(tmp.path().join("customers.db"));
    assert!(db.list_all().unwrap().is_empty());
}

#[test]
fn test_new_id_is_previous_max_plus_one() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("customers.db");
    let mut controller = controller_in(&tmp);

    controller.set_field(FormField::Name, "first");
    let first = controller.submit().unwrap();
    controller.set_field(FormField::Name, "second");
    let second = controller.submit().unwrap();
    assert_eq!(second, first + 1);

    let conn = Connection::open(&path).unwrap();
    let max: i64 = conn
        .query_row("SELECT MAX(id) FROM customers", [], |row| row.get(0))
        .unwrap();
    assert_eq!(max, second);
}

#[test]
fn test_blank_optionals_are_stored_as_null() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("customers.db");
    let mut controller = controller_in(&tmp);
    controller.set_field(FormField::Name, "Grace");
    controller.set_field(FormField::Phone, "   ");
    controller.submit().unwrap();

    let conn = Connection::open(&path).unwrap();
    let (phone, address): (Option<String>, Option<String>) = conn
        .query_row("SELECT phone, address FROM customers", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(phone, None);
    assert_eq!(address, None);
}
