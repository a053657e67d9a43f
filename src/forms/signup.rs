//! Signup and login payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date::{is_past_or_today_at, is_storage_shaped, CalendarDate};

/// Reasons a form is refused. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<&'static str>),

    #[error("The date of birth is not valid.")]
    InvalidDateOfBirth,

    #[error("The date of birth cannot be in the future.")]
    FutureDateOfBirth,
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::MissingFields(_) => "missing_fields",
            FormError::InvalidDateOfBirth => "invalid_date_of_birth",
            FormError::FutureDateOfBirth => "future_date_of_birth",
        }
    }
}

/// Raw signup form as posted by the page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    /// Canonical `YYYY-MM-DD`, produced by the date normalizer on the page.
    pub date_of_birth: String,
    pub email: String,
    pub password: String,
}

/// A signup that passed validation, ready for the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidSignup {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub date_of_birth: CalendarDate,
    pub email: String,
}

impl SignupForm {
    /// Validate against `today` (UTC calendar date).
    pub fn validate(&self, today: NaiveDate) -> Result<ValidSignup, FormError> {
        let missing: Vec<&'static str> = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("dateOfBirth", &self.date_of_birth),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let dob = self.date_of_birth.trim();
        if !is_storage_shaped(dob) {
            return Err(FormError::InvalidDateOfBirth);
        }
        let date_of_birth = CalendarDate::parse_storage(dob).ok_or(FormError::InvalidDateOfBirth)?;
        if !is_past_or_today_at(Some(dob), today) {
            return Err(FormError::FutureDateOfBirth);
        }

        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        Ok(ValidSignup {
            full_name: format!("{} {}", first_name, last_name),
            first_name,
            last_name,
            date_of_birth,
            email: self.email.trim().to_string(),
        })
    }
}

/// Login form. Credentials are checked by the provider, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let missing: Vec<&'static str> = [("email", &self.email), ("password", &self.password)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

const PROVIDER_MESSAGES: &[(&str, &str)] = &[
    (
        "User already registered",
        "This email is already registered. Please log in instead.",
    ),
    (
        "Password should be at least 6 characters",
        "The password must be at least 6 characters long.",
    ),
    ("Invalid email", "The email address is not valid."),
    (
        "Email rate limit exceeded",
        "Too many attempts. Please wait a few minutes before trying again.",
    ),
    (
        "Signup is disabled",
        "Registration is temporarily disabled. Please contact the administrator.",
    ),
];

const GENERIC_PROVIDER_MESSAGE: &str = "Something went wrong while creating the account. Please try again.";

/// Friendly text for a raw auth provider error.
pub fn provider_error_message(raw: &str) -> &'static str {
    PROVIDER_MESSAGES
        .iter()
        .find(|(needle, _)| raw.contains(needle))
        .map_or(GENERIC_PROVIDER_MESSAGE, |&(_, message)| message)
}
