use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::bookings::{BookingEntity, InsertBookingEntity},
        repositories::bookings::BookingRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::bookings},
};

pub struct BookingPostgres {
    db_pool: Arc<PgPool>,
}

impl BookingPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BookingRepository for BookingPostgres {
    async fn create(&self, insert_booking_entity: InsertBookingEntity) -> Result<BookingEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let booking = insert_into(bookings::table)
            .values(&insert_booking_entity)
            .returning(BookingEntity::as_returning())
            .get_result::<BookingEntity>(&mut conn)?;

        Ok(booking)
    }

    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let booking = bookings::table
            .find(booking_id)
            .select(BookingEntity::as_select())
            .first::<BookingEntity>(&mut conn)
            .optional()?;

        Ok(booking)
    }

    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<BookingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let booking = bookings::table
            .filter(bookings::user_id.eq(user_id))
            .filter(bookings::event_id.eq(event_id))
            .select(BookingEntity::as_select())
            .first::<BookingEntity>(&mut conn)
            .optional()?;

        Ok(booking)
    }

    async fn count_for_event(&self, event_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = bookings::table
            .filter(bookings::event_id.eq(event_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn set_status(&self, booking_id: Uuid, status: String) -> Result<BookingEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let booking = update(bookings::table.find(booking_id))
            .set(bookings::status.eq(status))
            .returning(BookingEntity::as_returning())
            .get_result::<BookingEntity>(&mut conn)?;

        Ok(booking)
    }

    async fn delete(&self, booking_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        delete(bookings::table.find(booking_id)).execute(&mut conn)?;

        Ok(())
    }
}
