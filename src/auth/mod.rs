//! Signup and login over the shared key-value store.
//!
//! Both operations are single-shot: they take the submitted form fields,
//! touch the store, and hand back the next [`View`] for the caller to route to.

pub mod types;

use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::error::UdaanError;
use crate::store::KeyValueStore;

pub use types::{CredentialRecord, LoginForm, Outcome, SignupForm, View};

pub const SIGNUP_SUCCESS_NOTICE: &str = "Signup successful!";

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Registers the form's email and password, replacing any previous record.
pub async fn register<S: KeyValueStore>(
    store: &S,
    form: &SignupForm,
) -> Result<Outcome, UdaanError> {
    let (Some(_name), Some(email), Some(password)) = (
        present(&form.name),
        present(&form.email),
        present(&form.password),
    ) else {
        return Err(UdaanError::MissingField);
    };

    let record = CredentialRecord {
        email: email.to_string(),
        password: password.to_string(),
    };
    record.save(store).await?;

    info!(email = %record.email, "registered credential record");
    Ok(Outcome {
        next: View::Login,
        notice: Some(SIGNUP_SUCCESS_NOTICE),
    })
}

/// Checks the form against the stored record; exact match on both fields.
pub async fn authenticate<S: KeyValueStore>(
    store: &S,
    form: &LoginForm,
) -> Result<Outcome, UdaanError> {
    let email = form.email.as_deref().unwrap_or_default();
    let password = form.password.as_deref().unwrap_or_default();

    let matched = match CredentialRecord::load(store).await? {
        Some(record) => {
            let email_ok = email.as_bytes().ct_eq(record.email.as_bytes());
            let password_ok = password.as_bytes().ct_eq(record.password.as_bytes());
            bool::from(email_ok & password_ok)
        }
        None => false,
    };

    if !matched {
        warn!(email = %email, "login rejected");
        return Err(UdaanError::InvalidCredentials);
    }

    info!(email = %email, "login accepted");
    Ok(Outcome {
        next: View::Dashboard,
        notice: None,
    })
}
