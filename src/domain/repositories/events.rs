use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::events::{EditEventEntity, EventEntity, InsertEventEntity};

#[async_trait]
#[automock]
pub trait EventRepository {
    async fn create(&self, insert_event_entity: InsertEventEntity) -> Result<EventEntity>;
    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<EventEntity>>;
    async fn list_all(&self) -> Result<Vec<EventEntity>>;
    async fn update(
        &self,
        event_id: Uuid,
        edit_event_entity: EditEventEntity,
    ) -> Result<EventEntity>;
    async fn delete(&self, event_id: Uuid) -> Result<()>;
}
