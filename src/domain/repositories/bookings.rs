use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::bookings::{BookingEntity, InsertBookingEntity};

#[async_trait]
#[automock]
pub trait BookingRepository {
    async fn create(&self, insert_booking_entity: InsertBookingEntity) -> Result<BookingEntity>;
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingEntity>>;
    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<BookingEntity>>;
    async fn count_for_event(&self, event_id: Uuid) -> Result<i64>;
    async fn set_status(&self, booking_id: Uuid, status: String) -> Result<BookingEntity>;
    async fn delete(&self, booking_id: Uuid) -> Result<()>;
}
