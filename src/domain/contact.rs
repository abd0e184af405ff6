use crate::errors::AppError;
use crate::helper;

pub use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub notes: String,

    #[serde(
        default = "helper::default_timestamp",
        deserialize_with = "helper::deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,

    #[serde(
        default = "helper::default_timestamp",
        deserialize_with = "helper::deserialize_timestamp"
    )]
    pub updated_at: DateTime<Utc>,
}

/// Field values for a contact that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company: String,
    pub notes: String,
}

/// A partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name cannot be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Invalid phone number format: must contain at least 10 digits".to_string()
    }

    pub fn email_req() -> String {
        "Invalid email format".to_string()
    }
}

impl ContactDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        check_fields(Some(&self.name), Some(&self.email), Some(&self.phone))
    }
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.company.is_none()
            && self.notes.is_none()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        check_fields(
            self.name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
        )
    }
}

impl Contact {
    pub fn new(id: u64, draft: ContactDraft) -> Self {
        let now = Utc::now();
        Contact {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            company: draft.company,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Writes every supplied field and refreshes `updated_at`.
    /// Callers validate the update first.
    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(company) = update.company {
            self.company = company;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }

        self.updated_at = Utc::now();
    }

    /// True when the lowercased `query` occurs in name, email, phone, company or notes.
    pub fn matches(&self, query: &str) -> bool {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.company,
            &self.notes,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
    }
}

fn check_fields(
    name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<(), AppError> {
    if name.is_some_and(|n| !validate_name(n)) {
        return Err(AppError::Validation(ValidationReq::name_req()));
    }

    if let Some(email) = email
        && !validate_email(email)?
    {
        return Err(AppError::Validation(ValidationReq::email_req()));
    }

    if phone.is_some_and(|p| !validate_phone(p)) {
        return Err(AppError::Validation(ValidationReq::phone_req()));
    }

    Ok(())
}

pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    // Email is optional
    if email.is_empty() {
        return Ok(true);
    }

    let re = Regex::new(EMAIL_PATTERN)?;
    Ok(re.is_match(email))
}

pub fn validate_phone(phone: &str) -> bool {
    // Phone is optional
    // Separators are ignored, only digits are counted
    phone.is_empty() || phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}
