use sea_orm::DatabaseConnection;

use crate::password::domain::PasswordRecord;
use crate::password::errors::PasswordError;
use crate::password::repository::PasswordRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmPasswordRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: models::password::Model) -> PasswordRecord {
    PasswordRecord {
        id: m.id,
        service_name: m.service_name,
        password: m.password,
        hashed_password: m.hashed_password,
    }
}

#[async_trait::async_trait]
impl PasswordRepository for SeaOrmPasswordRepository {
    async fn insert(
        &self,
        service_name: &str,
        password: &str,
        hashed_password: &str,
    ) -> Result<PasswordRecord, PasswordError> {
        let created = models::password::create(&self.db, service_name, password, hashed_password)
            .await
            .map_err(|e| PasswordError::Repository(e.to_string()))?;
        Ok(to_record(created))
    }

    async fn find_exact(&self, service_name: &str) -> Result<Option<PasswordRecord>, PasswordError> {
        let res = models::password::find_by_service_name(&self.db, service_name)
            .await
            .map_err(|e| PasswordError::Repository(e.to_string()))?;
        Ok(res.map(to_record))
    }

    async fn find_containing(&self, fragment: &str) -> Result<Vec<PasswordRecord>, PasswordError> {
        let res = models::password::search_service_name(&self.db, fragment)
            .await
            .map_err(|e| PasswordError::Repository(e.to_string()))?;
        Ok(res.into_iter().map(to_record).collect())
    }
}
