use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login form input; built at submit time and never persisted
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Issued by `POST /users/login`; stored verbatim under the `token` key
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub access_token: String,
    /// Whatever else the issuer returns (expiry, token type, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            extra: Map::new(),
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Authenticated user's record. The API decides its fields.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Profile {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Profile {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Best human-readable name the record offers
    pub fn display_name(&self) -> String {
        ["fullname", "name", "username", "email"]
            .iter()
            .find_map(|key| self.field(key))
            .unwrap_or("user")
            .to_string()
    }
}

/// `GET /users/me` response envelope
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub user: Profile,
}

/// Error payload the API attaches to non-2xx responses
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// Some validators answer with a list of messages instead of a string
    pub fn text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_keeps_issuer_fields() {
        let session: Session = serde_json::from_value(json!({
            "access_token": "abc",
            "expires_in": 3600
        }))
        .unwrap();
        assert_eq!(session.access_token, "abc");
        assert_eq!(session.bearer(), "Bearer abc");
        assert_eq!(serde_json::to_value(&session).unwrap(), json!({"access_token": "abc", "expires_in": 3600}));
    }

    #[test]
    fn profile_display_name_falls_back_through_known_fields() {
        let profile: Profile = serde_json::from_value(json!({"email": "a@b.c", "name": "Somchai"})).unwrap();
        assert_eq!(profile.display_name(), "Somchai");
        assert_eq!(Profile::default().display_name(), "user");
    }

    #[test]
    fn error_body_accepts_string_or_list() {
        let single: ErrorBody = serde_json::from_value(json!({"message": "bad"})).unwrap();
        let many: ErrorBody = serde_json::from_value(json!({"message": ["a", "b"]})).unwrap();
        let none: ErrorBody = serde_json::from_value(json!({"statusCode": 500})).unwrap();
        assert_eq!(single.text().as_deref(), Some("bad"));
        assert_eq!(many.text().as_deref(), Some("a, b"));
        assert_eq!(none.text(), None);
    }
}
