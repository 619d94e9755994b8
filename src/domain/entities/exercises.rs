use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::exercises;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = exercises)]
pub struct ExerciseEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub muscles: Option<String>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = exercises)]
pub struct UpsertExerciseEntity {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub muscles: Option<String>,
}
