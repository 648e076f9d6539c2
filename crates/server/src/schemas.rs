use serde::{Deserialize, Serialize};

use service::password::domain::PasswordRecord;

pub const SERVICE_NAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 8;

/// One field-level violation, as serialized into the 422 response body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn too_short(field: &str, min: usize) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: format!("String should have at least {min} characters"),
            kind: "string_too_short".to_string(),
        }
    }
}

/// Creation payload: service name plus plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordCreate {
    pub service_name: String,
    pub password: String,
}

impl PasswordCreate {
    /// Shape validation applied before the manager sees the payload.
    /// Length bounds only; uniqueness stays a storage concern.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.service_name.chars().count() < SERVICE_NAME_MIN_LEN {
            errors.push(FieldError::too_short("service_name", SERVICE_NAME_MIN_LEN));
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            errors.push(FieldError::too_short("password", PASSWORD_MIN_LEN));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// What the API returns for a record. `id` and `hashed_password` never
/// leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRead {
    pub service_name: String,
    pub password: String,
}

impl From<PasswordRecord> for PasswordRead {
    fn from(r: PasswordRecord) -> Self {
        Self { service_name: r.service_name, password: r.password }
    }
}
