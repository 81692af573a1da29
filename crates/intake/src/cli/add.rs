//! `intake add`: submit one record without the full-screen form.
//!
//! Goes through the same controller as the form, so the same rules apply
//! and the same messages come back.

use anyhow::Result;
use intake::form::{FormController, FormField, SUCCESS_MESSAGE};
use intake_db::CustomerDb;
use std::path::Path;

use crate::cli::error::HelpfulError;

/// Arguments for the add command
#[derive(Debug, clap::Args)]
pub struct AddArgs {
    /// Customer name (required)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Birthday as YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub birthday: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub address: String,

    /// Email, Phone or Mail
    #[arg(long = "contact", default_value = "Email")]
    pub preferred_contact: String,

    /// Print the new id as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AddArgs, database: &Path) -> Result<()> {
    let db = CustomerDb::open(database)?;
    let mut controller = FormController::new(db);
    controller.set_field(FormField::Name, args.name);
    controller.set_field(FormField::Birthday, args.birthday);
    controller.set_field(FormField::Email, args.email);
    controller.set_field(FormField::Phone, args.phone);
    controller.set_field(FormField::Address, args.address);
    controller.set_field(FormField::PreferredContact, args.preferred_contact);

    let id = controller
        .submit()
        .map_err(|err| HelpfulError::submission_rejected(err.title(), &err.to_string()))?;

    if args.json {
        println!("{}", serde_json::json!({ "id": id, "message": SUCCESS_MESSAGE }));
    } else {
        println!("{} (id {})", SUCCESS_MESSAGE, id);
    }
    Ok(())
}
