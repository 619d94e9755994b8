use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::events::{EditEventEntity, EventEntity, InsertEventEntity},
        repositories::events::EventRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::events},
};

pub struct EventPostgres {
    db_pool: Arc<PgPool>,
}

impl EventPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl EventRepository for EventPostgres {
    async fn create(&self, insert_event_entity: InsertEventEntity) -> Result<EventEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let event = insert_into(events::table)
            .values(&insert_event_entity)
            .returning(EventEntity::as_returning())
            .get_result::<EventEntity>(&mut conn)?;

        Ok(event)
    }

    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<EventEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let event = events::table
            .find(event_id)
            .select(EventEntity::as_select())
            .first::<EventEntity>(&mut conn)
            .optional()?;

        Ok(event)
    }

    async fn list_all(&self) -> Result<Vec<EventEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = events::table
            .select(EventEntity::as_select())
            .order((events::date.asc(), events::starts_at.asc()))
            .load::<EventEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        event_id: Uuid,
        edit_event_entity: EditEventEntity,
    ) -> Result<EventEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let event = update(events::table.find(event_id))
            .set(&edit_event_entity)
            .returning(EventEntity::as_returning())
            .get_result::<EventEntity>(&mut conn)?;

        Ok(event)
    }

    async fn delete(&self, event_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(events::table.find(event_id)).execute(&mut conn)?;

        Ok(())
    }
}
