use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::{member_profiles, trainer_profiles, users};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = users)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct RegisterUserEntity {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub struct EditUserEntity {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, Selectable, Queryable)]
#[diesel(table_name = member_profiles)]
pub struct MemberProfileEntity {
    pub user_id: Uuid,
    pub weight: Option<f64>,
    pub height: Option<i32>,
    pub membership_status: Option<String>,
}

#[derive(Debug, Clone, Insertable, Selectable, Queryable)]
#[diesel(table_name = trainer_profiles)]
pub struct TrainerProfileEntity {
    pub user_id: Uuid,
    pub description: Option<String>,
    pub experience: Option<i32>,
    pub specialization: Option<String>,
    pub rating: Option<i32>,
    pub rate_per_hour: Option<i32>,
    pub certification: Option<String>,
    pub photo: Option<String>,
}
