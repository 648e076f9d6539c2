use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use service::password::{
    domain::NewPassword, repo::seaorm::SeaOrmPasswordRepository, PasswordManager,
};

use crate::errors::ApiError;
use crate::routes::AppState;
use crate::schemas::{PasswordCreate, PasswordRead};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub service_name: String,
}

fn manager(state: &AppState) -> PasswordManager<SeaOrmPasswordRepository> {
    PasswordManager::new(Arc::new(SeaOrmPasswordRepository { db: state.db.clone() }))
}

/// GET /password/:service_name, exact lookup
pub async fn get_password(
    State(state): State<AppState>,
    Path(service_name): Path<String>,
) -> Result<Json<PasswordRead>, ApiError> {
    let record = manager(&state).get_password(&service_name).await?;
    Ok(Json(record.into()))
}

/// GET /password/?service_name=, substring search
pub async fn search_password(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Json<Vec<PasswordRead>>, ApiError> {
    let records = manager(&state).search_password(&q.service_name).await?;
    info!(count = records.len(), fragment = %q.service_name, "password_search");
    Ok(Json(records.into_iter().map(PasswordRead::from).collect()))
}

/// POST /password/, create a record
pub async fn create_password(
    State(state): State<AppState>,
    Json(input): Json<PasswordCreate>,
) -> Result<(StatusCode, Json<PasswordRead>), ApiError> {
    if let Err(errors) = input.validate() {
        return Err(ApiError::Validation(errors));
    }

    let created = manager(&state)
        .create_password(NewPassword {
            service_name: input.service_name.clone(),
            password: input.password.clone(),
        })
        .await?;
    info!(id = created.id, service_name = %created.service_name, "created password record");

    // The response reflects the submitted values, not the stored row.
    Ok((
        StatusCode::CREATED,
        Json(PasswordRead { service_name: input.service_name, password: input.password }),
    ))
}
