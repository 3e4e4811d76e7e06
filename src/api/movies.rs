use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{
    ApiError, AppState, CreateMovieRequest, MessageResponse, MovieCreatedResponse, MovieDto,
    UpdateMovieRequest,
};
use crate::api::validation::validate_uid;
use crate::models::{MovieFilter, MoviePatch, NewMovie};

#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieListQuery>,
) -> Result<Json<Vec<MovieDto>>, ApiError> {
    let filter = MovieFilter {
        director_id: params.director_id,
        genre_id: params.genre_id,
    };

    let movies = state.store().list_movies(&filter).await?;

    Ok(Json(movies.into_iter().map(MovieDto::from).collect()))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieCreatedResponse>), ApiError> {
    let new = NewMovie::from(payload);

    let id = state
        .store()
        .create_movie(&new)
        .await
        .map_err(ApiError::write_failure)?;

    Ok((
        StatusCode::CREATED,
        Json(MovieCreatedResponse {
            message: "The movie has been added".to_string(),
            id,
        }),
    ))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<i32>,
) -> Result<Json<MovieDto>, ApiError> {
    validate_uid(uid)?;

    let movie = state
        .store()
        .get_movie(uid)
        .await?
        .ok_or_else(|| ApiError::movie_not_found(uid))?;

    Ok(Json(movie.into()))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<i32>,
    Json(payload): Json<UpdateMovieRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_uid(uid)?;

    let patch = MoviePatch::from(payload);
    if patch.is_empty() {
        return Err(ApiError::validation("update body contains no fields"));
    }

    let rows_affected = state
        .store()
        .update_movie(uid, &patch)
        .await
        .map_err(ApiError::write_failure)?;

    if rows_affected == 0 {
        return Err(ApiError::movie_not_found(uid));
    }

    Ok(Json(MessageResponse {
        message: "The movie has been updated".to_string(),
    }))
}
