use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::events::{EditEventEntity, EventEntity, InsertEventEntity},
    value_objects::enums::event_types::EventType,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub duration_minutes: i32,
    pub event_type: EventType,
    pub is_personal_training: bool,
    pub max_participants: Option<i32>,
    pub room_number: Option<String>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<EventEntity> for EventModel {
    fn from(entity: EventEntity) -> Self {
        let event_type = EventType::from_str(&entity.event_type).unwrap_or_default();
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            date: entity.date,
            starts_at: entity.starts_at,
            duration_minutes: entity.duration_minutes,
            event_type,
            is_personal_training: entity.is_personal_training,
            max_participants: entity.max_participants,
            room_number: entity.room_number,
            creator_id: entity.creator_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventModel {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub duration_minutes: i32,
    pub event_type: EventType,
    #[serde(default)]
    pub is_personal_training: bool,
    pub max_participants: Option<i32>,
    pub room_number: Option<String>,
}

impl CreateEventModel {
    pub fn to_entity(&self, creator_id: Uuid) -> InsertEventEntity {
        InsertEventEntity {
            name: self.name.clone(),
            description: self.description.clone(),
            date: self.date,
            starts_at: self.starts_at,
            duration_minutes: self.duration_minutes,
            event_type: self.event_type.to_string(),
            is_personal_training: self.is_personal_training,
            max_participants: self.max_participants,
            room_number: self.room_number.clone(),
            creator_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditEventModel {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub duration_minutes: i32,
    pub event_type: EventType,
    pub max_participants: Option<i32>,
    pub room_number: Option<String>,
}

impl EditEventModel {
    pub fn to_entity(&self) -> EditEventEntity {
        EditEventEntity {
            name: self.name.clone(),
            description: self.description.clone(),
            date: self.date,
            starts_at: self.starts_at,
            duration_minutes: self.duration_minutes,
            event_type: self.event_type.to_string(),
            max_participants: self.max_participants,
            room_number: self.room_number.clone(),
        }
    }
}
