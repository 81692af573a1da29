//! Customer record types.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Column order used everywhere the customer table is rendered.
pub const CUSTOMER_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "birthday",
    "email",
    "phone",
    "address",
    "preferred_contact",
    "created_at",
];

/// Preferred contact method. The table's CHECK constraint accepts exactly
/// these three spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Mail,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [ContactMethod::Email, ContactMethod::Phone, ContactMethod::Mail];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Mail => "Mail",
        }
    }

    /// Next value in dropdown order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ContactMethod::Email => ContactMethod::Phone,
            ContactMethod::Phone => ContactMethod::Mail,
            ContactMethod::Mail => ContactMethod::Email,
        }
    }

    /// Previous value in dropdown order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            ContactMethod::Email => ContactMethod::Mail,
            ContactMethod::Phone => ContactMethod::Email,
            ContactMethod::Mail => ContactMethod::Phone,
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the allowed contact methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContactMethod(pub String);

impl fmt::Display for UnknownContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown contact method: '{}'", self.0)
    }
}

impl std::error::Error for UnknownContactMethod {}

impl FromStr for ContactMethod {
    type Err = UnknownContactMethod;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownContactMethod(s.to_string()))
    }
}

/// A stored customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Kept as stored text so rows written by other tools still load.
    pub preferred_contact: Option<String>,
    pub created_at: Option<String>,
}

impl Customer {
    /// Cells in `CUSTOMER_COLUMNS` order; NULL renders as empty text.
    pub fn to_cells(&self) -> Vec<String> {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        vec![
            self.id.to_string(),
            self.name.clone(),
            text(&self.birthday),
            text(&self.email),
            text(&self.phone),
            text(&self.address),
            text(&self.preferred_contact),
            text(&self.created_at),
        ]
    }
}

/// Values for a new row. Blank optional fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: ContactMethod,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, preferred_contact: ContactMethod) -> Self {
        Self {
            name: name.into(),
            birthday: None,
            email: None,
            phone: None,
            address: None,
            preferred_contact,
        }
    }
}

/// Fold a trimmed-empty string into `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
