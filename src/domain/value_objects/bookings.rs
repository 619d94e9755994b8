use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::bookings::BookingEntity,
    value_objects::enums::booking_statuses::BookingStatus,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingModel {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<BookingEntity> for BookingModel {
    fn from(entity: BookingEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            status: BookingStatus::from_str(&entity.status),
            created_at: entity.created_at,
        }
    }
}
