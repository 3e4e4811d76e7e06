use crate::entities::{movie, prelude::*};
use crate::models::{MovieFilter, MoviePatch, NewMovie};
use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, filter: &MovieFilter) -> Result<Vec<movie::Model>> {
        let mut query = Movie::find().order_by_asc(movie::Column::Id);

        if let Some(director_id) = filter.director_id {
            query = query.filter(movie::Column::DirectorId.eq(director_id));
        }

        if let Some(genre_id) = filter.genre_id {
            query = query.filter(movie::Column::GenreId.eq(genre_id));
        }

        Ok(query.all(&self.conn).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<movie::Model>> {
        Ok(Movie::find_by_id(id).one(&self.conn).await?)
    }

    /// Inserts a movie inside a transaction and returns the assigned id.
    /// Referential integrity of `genre_id`/`director_id` is left to the
    /// store's foreign key constraints.
    pub async fn create(&self, new: &NewMovie) -> Result<i32> {
        let active_model = movie::ActiveModel {
            id: new.id.map_or(NotSet, Set),
            title: Set(new.title.clone()),
            description: Set(new.description.clone()),
            trailer: Set(new.trailer.clone()),
            year: Set(new.year),
            rating: Set(new.rating),
            genre_id: Set(new.genre_id),
            director_id: Set(new.director_id),
        };

        let txn = self.conn.begin().await?;
        let res = Movie::insert(active_model).exec(&txn).await?;
        txn.commit().await?;

        info!("Added movie with ID: {}", res.last_insert_id);
        Ok(res.last_insert_id)
    }

    /// Applies a partial update as a single `UPDATE ... WHERE id = ?`
    /// without loading the row first. Returns the number of matched rows,
    /// zero meaning the id does not exist.
    pub async fn update(&self, id: i32, patch: &MoviePatch) -> Result<u64> {
        let mut update = Movie::update_many().filter(movie::Column::Id.eq(id));

        if let Some(title) = &patch.title {
            update = update.col_expr(movie::Column::Title, Expr::value(title.clone()));
        }
        if let Some(description) = &patch.description {
            update = update.col_expr(movie::Column::Description, Expr::value(description.clone()));
        }
        if let Some(trailer) = &patch.trailer {
            update = update.col_expr(movie::Column::Trailer, Expr::value(trailer.clone()));
        }
        if let Some(year) = patch.year {
            update = update.col_expr(movie::Column::Year, Expr::value(year));
        }
        if let Some(rating) = patch.rating {
            update = update.col_expr(movie::Column::Rating, Expr::value(rating));
        }
        if let Some(genre_id) = patch.genre_id {
            update = update.col_expr(movie::Column::GenreId, Expr::value(genre_id));
        }
        if let Some(director_id) = patch.director_id {
            update = update.col_expr(movie::Column::DirectorId, Expr::value(director_id));
        }

        let result = update.exec(&self.conn).await?;

        if result.rows_affected > 0 {
            info!("Updated movie {}", id);
        }
        Ok(result.rows_affected)
    }
}
