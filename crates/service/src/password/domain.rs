use serde::{Deserialize, Serialize};

/// Creation input (already shape-validated at the request boundary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPassword {
    pub service_name: String,
    pub password: String,
}

/// Stored record (business view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRecord {
    pub id: i32,
    pub service_name: String,
    pub password: String,
    pub hashed_password: String,
}
