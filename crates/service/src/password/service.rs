use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use tracing::{info, instrument};

use super::domain::{NewPassword, PasswordRecord};
use super::errors::PasswordError;
use super::repository::PasswordRepository;

/// Password business service independent of web framework
pub struct PasswordManager<R: PasswordRepository> {
    repo: Arc<R>,
}

impl<R: PasswordRepository> PasswordManager<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Hash a plaintext password with a fresh random salt. Returns the
    /// PHC-format string that goes into the `hashed_password` column.
    fn hash_password(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hash(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Retrieve the record whose service name matches exactly.
    ///
    /// # Examples
    /// ```
    /// use service::password::{service::PasswordManager, repository::mock::MockPasswordRepository};
    /// use service::password::domain::NewPassword;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockPasswordRepository::default());
    /// let mgr = PasswordManager::new(repo);
    /// let input = NewPassword { service_name: "gitlab".into(), password: "longenough".into() };
    /// let _ = tokio_test::block_on(mgr.create_password(input)).unwrap();
    /// let rec = tokio_test::block_on(mgr.get_password("gitlab")).unwrap();
    /// assert_eq!(rec.password, "longenough");
    /// ```
    pub async fn get_password(&self, service_name: &str) -> Result<PasswordRecord, PasswordError> {
        self.repo
            .find_exact(service_name)
            .await?
            .ok_or(PasswordError::NotFound)
    }

    /// All records whose service name contains the fragment. An empty result
    /// set is an error, matching the read-path contract.
    pub async fn search_password(&self, fragment: &str) -> Result<Vec<PasswordRecord>, PasswordError> {
        let found = self.repo.find_containing(fragment).await?;
        if found.is_empty() {
            return Err(PasswordError::NotFound);
        }
        Ok(found)
    }

    /// Create a new record. The hash is computed exactly once, here; one
    /// insert, no retries. Storage faults (including a duplicate service
    /// name) pass through as repository errors.
    ///
    /// # Examples
    /// ```
    /// use service::password::{service::PasswordManager, repository::mock::MockPasswordRepository};
    /// use service::password::domain::NewPassword;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockPasswordRepository::default());
    /// let mgr = PasswordManager::new(repo);
    /// let input = NewPassword { service_name: "gitlab".into(), password: "longenough".into() };
    /// let rec = tokio_test::block_on(mgr.create_password(input)).unwrap();
    /// assert!(rec.hashed_password.starts_with("$argon2"));
    /// ```
    #[instrument(skip(self, input), fields(service_name = %input.service_name))]
    pub async fn create_password(&self, input: NewPassword) -> Result<PasswordRecord, PasswordError> {
        let hashed = Self::hash_password(&input.password)?;
        let record = self.repo.insert(&input.service_name, &input.password, &hashed).await?;
        info!(id = record.id, service_name = %record.service_name, "password_created");
        Ok(record)
    }
}
