use serde::{Deserialize, Serialize};

use crate::entities::{director, genre, movie};
use crate::models::{MoviePatch, NewMovie};

/// Flat allow-listed projection of a movie row. Related entities appear only
/// as foreign key ids.
#[derive(Debug, Serialize)]
pub struct MovieDto {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieDto {
    fn from(model: movie::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            trailer: model.trailer,
            year: model.year,
            rating: model.rating,
            genre_id: model.genre_id,
            director_id: model.director_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DirectorDto {
    pub id: i32,
    pub name: String,
}

impl From<director::Model> for DirectorDto {
    fn from(model: director::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreDto {
    pub id: i32,
    pub name: String,
}

impl From<genre::Model> for GenreDto {
    fn from(model: genre::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Movie creation body. Any subset of the movie fields is accepted; keys
/// outside the allow-list fail deserialization instead of being dropped.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            id: req.id,
            title: req.title,
            description: req.description,
            trailer: req.trailer,
            year: req.year,
            rating: req.rating,
            genre_id: req.genre_id,
            director_id: req.director_id,
        }
    }
}

/// Partial update body. Same allow-list as creation minus the primary key.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f32>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<UpdateMovieRequest> for MoviePatch {
    fn from(req: UpdateMovieRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            trailer: req.trailer,
            year: req.year,
            rating: req.rating,
            genre_id: req.genre_id,
            director_id: req.director_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieCreatedResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
