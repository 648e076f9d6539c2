use async_trait::async_trait;

use super::domain::PasswordRecord;
use super::errors::PasswordError;

/// Repository abstraction for password persistence.
#[async_trait]
pub trait PasswordRepository: Send + Sync {
    async fn insert(
        &self,
        service_name: &str,
        password: &str,
        hashed_password: &str,
    ) -> Result<PasswordRecord, PasswordError>;

    async fn find_exact(&self, service_name: &str) -> Result<Option<PasswordRecord>, PasswordError>;
    async fn find_containing(&self, fragment: &str) -> Result<Vec<PasswordRecord>, PasswordError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockPasswordRepository {
        rows: Mutex<Vec<PasswordRecord>>,
    }

    #[async_trait]
    impl PasswordRepository for MockPasswordRepository {
        async fn insert(
            &self,
            service_name: &str,
            password: &str,
            hashed_password: &str,
        ) -> Result<PasswordRecord, PasswordError> {
            let mut rows = self.rows.lock().unwrap();
            // Mirror the storage layer's unique index on service_name.
            if rows.iter().any(|r| r.service_name == service_name) {
                return Err(PasswordError::Repository(format!(
                    "duplicate service_name: {service_name}"
                )));
            }
            let record = PasswordRecord {
                id: rows.len() as i32 + 1,
                service_name: service_name.to_string(),
                password: password.to_string(),
                hashed_password: hashed_password.to_string(),
            };
            rows.push(record.clone());
            Ok(record)
        }

        async fn find_exact(&self, service_name: &str) -> Result<Option<PasswordRecord>, PasswordError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|r| r.service_name == service_name).cloned())
        }

        async fn find_containing(&self, fragment: &str) -> Result<Vec<PasswordRecord>, PasswordError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|r| r.service_name.contains(fragment)).cloned().collect())
        }
    }
}
