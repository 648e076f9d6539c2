use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "password")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_name: String,
    pub password: String,
    pub hashed_password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one row; `id` is assigned by the database. Uniqueness of
/// `service_name` is enforced by the storage layer, not here.
pub async fn create(
    db: &DatabaseConnection,
    service_name: &str,
    password: &str,
    hashed_password: &str,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        service_name: Set(service_name.to_string()),
        password: Set(password.to_string()),
        hashed_password: Set(hashed_password.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Row whose service name equals the input exactly, if any.
pub async fn find_by_service_name(
    db: &DatabaseConnection,
    service_name: &str,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::ServiceName.eq(service_name))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All rows whose service name contains the fragment (`LIKE '%fragment%'`,
/// case-sensitive under Postgres). No ordering clause.
pub async fn search_service_name(
    db: &DatabaseConnection,
    fragment: &str,
) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::ServiceName.contains(fragment))
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
