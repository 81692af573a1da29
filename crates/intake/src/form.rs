//! Form controller: owns the form state and turns a submission into at most
//! one stored row.

use intake_db::{non_blank, ContactMethod, CustomerStore, DbError, NewCustomer};
use thiserror::Error;
use tracing::{info, warn};

use crate::validate::{parse_contact, validate, ValidationError};
use crate::viewer::{BoundViewer, CustomerTableSource, TableViewer};

pub const SUCCESS_MESSAGE: &str = "Your information was submitted.";

/// Editable fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Birthday,
    Email,
    Phone,
    Address,
    PreferredContact,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Birthday,
        FormField::Email,
        FormField::Phone,
        FormField::Address,
        FormField::PreferredContact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name *",
            FormField::Birthday => "Birthday (YYYY-MM-DD)",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Address => "Address",
            FormField::PreferredContact => "Preferred Contact *",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Free-text fields accept typing; the contact field is a dropdown.
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::PreferredContact)
    }
}

/// Current values of every form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub preferred_contact: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            birthday: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            preferred_contact: ContactMethod::default().as_str().to_string(),
        }
    }
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Birthday => &self.birthday,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Address => &self.address,
            FormField::PreferredContact => &self.preferred_contact,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Birthday => &mut self.birthday,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Address => &mut self.address,
            FormField::PreferredContact => &mut self.preferred_contact,
        }
    }

    /// Copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            birthday: self.birthday.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            preferred_contact: self.preferred_contact.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(
            &self.name,
            &self.birthday,
            &self.email,
            &self.phone,
            &self.preferred_contact,
        )
    }

    /// Insert model for a validated form.
    pub fn to_new_customer(&self) -> Result<NewCustomer, ValidationError> {
        self.validate()?;
        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            birthday: non_blank(&self.birthday),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            address: non_blank(&self.address),
            preferred_contact: parse_contact(&self.preferred_contact)?,
        })
    }
}

/// Why a submission did not produce a row.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] DbError),
}

impl SubmitError {
    /// Dialog title for this failure.
    pub fn title(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "Validation",
            SubmitError::Store(_) => "Error",
        }
    }
}

pub struct FormController<S: CustomerStore + Clone> {
    form: FormState,
    store: S,
    viewer: BoundViewer<S>,
}

impl<S: CustomerStore + Clone> FormController<S> {
    /// Builds the controller and loads the bound grid once.
    pub fn new(store: S) -> Self {
        let viewer = TableViewer::open(CustomerTableSource::new(store.clone()));
        Self {
            form: FormState::default(),
            store,
            viewer,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn viewer(&self) -> &BoundViewer<S> {
        &self.viewer
    }

    /// Replace one text field's value.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.value_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        if field.is_text() {
            self.form.value_mut(field).push(ch);
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        if field.is_text() {
            self.form.value_mut(field).pop();
        }
    }

    /// Step the preferred-contact dropdown. An unrecognised value restarts
    /// at the default.
    pub fn cycle_contact(&mut self, forward: bool) {
        let next = match self.form.preferred_contact.parse::<ContactMethod>() {
            Ok(current) if forward => current.next(),
            Ok(current) => current.prev(),
            Err(_) => ContactMethod::default(),
        };
        self.form.preferred_contact = next.as_str().to_string();
    }

    /// Reset every field; contact goes back to `Email`.
    pub fn clear(&mut self) {
        self.form = FormState::default();
    }

    pub fn refresh(&mut self) {
        self.viewer.refresh();
    }

    /// Validate, store, then clear and refresh. On any failure the form is
    /// left exactly as the user typed it.
    pub fn submit(&mut self) -> Result<i64, SubmitError> {
        let trimmed = self.form.trimmed();
        let record = trimmed.to_new_customer().map_err(|err| {
            info!(rule = %err, "Submission rejected");
            err
        })?;

        let id = self.store.insert(&record).map_err(|err| {
            warn!(error = %err, "Customer insert failed");
            err
        })?;

        self.clear();
        self.viewer.refresh();
        Ok(id)
    }
}
