use serde::{Deserialize, Serialize};

use crate::error::UdaanError;
use crate::store::{KeyValueStore, USER_EMAIL_KEY, USER_PASSWORD_KEY};

/// Page the presentation layer should move to after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Login,
    Dashboard,
}

impl View {
    pub fn page(&self) -> &'static str {
        match self {
            View::Login => "login.html",
            View::Dashboard => "dashboard.html",
        }
    }
}

/// Result of a successful operation: where to go next and what, if anything, to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub next: View,
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// The single registered `(email, password)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    /// Reads the record; `None` unless both keys are present.
    pub async fn load<S: KeyValueStore>(store: &S) -> Result<Option<Self>, UdaanError> {
        let email = store.get(USER_EMAIL_KEY).await?;
        let password = store.get(USER_PASSWORD_KEY).await?;
        Ok(email
            .zip(password)
            .map(|(email, password)| CredentialRecord { email, password }))
    }

    /// Overwrites whatever record was stored before, both keys in one batch.
    pub async fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), UdaanError> {
        store
            .set_many(&[
                (USER_EMAIL_KEY, self.email.as_str()),
                (USER_PASSWORD_KEY, self.password.as_str()),
            ])
            .await
    }
}
