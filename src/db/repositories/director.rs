use crate::entities::{director, prelude::*};
use anyhow::Result;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder,
};
use tracing::info;

pub struct DirectorRepository {
    conn: DatabaseConnection,
}

impl DirectorRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<director::Model>> {
        Ok(Director::find()
            .order_by_asc(director::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<director::Model>> {
        Ok(Director::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn add(&self, name: &str) -> Result<i32> {
        let active_model = director::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let res = Director::insert(active_model).exec(&self.conn).await?;
        info!("Added director '{}' with ID: {}", name, res.last_insert_id);
        Ok(res.last_insert_id)
    }
}
