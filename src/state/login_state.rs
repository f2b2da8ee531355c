use crate::error::ValidationError;
use crate::models::Credentials;
use crate::state::notification::Notification;

/// Login page form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub field_errors: ValidationError,
    pub submitting: bool,
    pub notification: Option<Notification>,
}

impl LoginState {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

/// Both fields must be non-empty. Whitespace is sent as typed.
pub fn validate(credentials: &Credentials) -> Result<(), ValidationError> {
    let errors = ValidationError {
        username: credentials
            .username
            .is_empty()
            .then(|| "email not empty".to_string()),
        password: credentials
            .password
            .is_empty()
            .then(|| "password not empty".to_string()),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
