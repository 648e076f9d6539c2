use thiserror::Error;

/// Business errors for password workflows
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password(s) not found")]
    NotFound,
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("repository error: {0}")]
    Repository(String),
}
