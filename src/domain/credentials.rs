use secrecy::Secret;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }

    /// Fresh credentials that no previous scenario run has registered.
    pub fn generate() -> Self {
        Self::new(
            format!("{}@example.com", Uuid::new_v4()),
            Uuid::new_v4().to_string(),
        )
    }
}

/// Login response body.
#[derive(Debug, serde::Deserialize)]
pub struct AccessToken {
    pub access_token: Secret<String>,
    #[serde(default)]
    pub token_type: String,
}
