use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, DirectorDto};
use crate::api::validation::validate_uid;

pub async fn list_directors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DirectorDto>>, ApiError> {
    let directors = state.store().list_directors().await?;

    Ok(Json(directors.into_iter().map(DirectorDto::from).collect()))
}

pub async fn get_director(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<i32>,
) -> Result<Json<DirectorDto>, ApiError> {
    validate_uid(uid)?;

    let director = state
        .store()
        .get_director(uid)
        .await?
        .ok_or_else(|| ApiError::director_not_found(uid))?;

    Ok(Json(director.into()))
}
