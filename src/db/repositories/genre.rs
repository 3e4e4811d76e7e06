use crate::entities::{genre, prelude::*};
use anyhow::Result;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};
use tracing::info;

pub struct GenreRepository {
    conn: DatabaseConnection,
}

impl GenreRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<genre::Model>> {
        Ok(Genre::find()
            .order_by_asc(genre::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<genre::Model>> {
        Ok(Genre::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn add(&self, name: &str) -> Result<i32> {
        let active_model = genre::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let res = Genre::insert(active_model).exec(&self.conn).await?;
        info!("Added genre '{}' with ID: {}", name, res.last_insert_id);
        Ok(res.last_insert_id)
    }
}
