use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::events;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = events)]
pub struct EventEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub duration_minutes: i32,
    pub event_type: String,
    pub is_personal_training: bool,
    pub max_participants: Option<i32>,
    pub room_number: Option<String>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub struct InsertEventEntity {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub duration_minutes: i32,
    pub event_type: String,
    pub is_personal_training: bool,
    pub max_participants: Option<i32>,
    pub room_number: Option<String>,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = events)]
pub struct EditEventEntity {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub duration_minutes: i32,
    pub event_type: String,
    pub max_participants: Option<i32>,
    pub room_number: Option<String>,
}
