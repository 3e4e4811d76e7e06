use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::{director, genre, movie};
use crate::models::{MovieFilter, MoviePatch, NewMovie};

pub mod migrator;
pub mod repositories;

/// Shared handle to the relational store. Cloned into the HTTP state and CLI
/// commands; opened once at startup, closed when the last clone drops.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        let in_memory = path_str.starts_with(":memory:");

        if !in_memory {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        // Pooled in-memory SQLite connections would each open their own
        // empty database, so an in-memory URL gets a single connection.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn director_repo(&self) -> repositories::director::DirectorRepository {
        repositories::director::DirectorRepository::new(self.conn.clone())
    }

    fn genre_repo(&self) -> repositories::genre::GenreRepository {
        repositories::genre::GenreRepository::new(self.conn.clone())
    }

    pub async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<movie::Model>> {
        self.movie_repo().list(filter).await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<movie::Model>> {
        self.movie_repo().get(id).await
    }

    pub async fn create_movie(&self, new: &NewMovie) -> Result<i32> {
        self.movie_repo().create(new).await
    }

    pub async fn update_movie(&self, id: i32, patch: &MoviePatch) -> Result<u64> {
        self.movie_repo().update(id, patch).await
    }

    pub async fn list_directors(&self) -> Result<Vec<director::Model>> {
        self.director_repo().list().await
    }

    pub async fn get_director(&self, id: i32) -> Result<Option<director::Model>> {
        self.director_repo().get(id).await
    }

    pub async fn add_director(&self, name: &str) -> Result<i32> {
        self.director_repo().add(name).await
    }

    pub async fn list_genres(&self) -> Result<Vec<genre::Model>> {
        self.genre_repo().list().await
    }

    pub async fn get_genre(&self, id: i32) -> Result<Option<genre::Model>> {
        self.genre_repo().get(id).await
    }

    pub async fn add_genre(&self, name: &str) -> Result<i32> {
        self.genre_repo().add(name).await
    }
}
