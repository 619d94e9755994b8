use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::{
    workout_logs, workout_plan_exercises, workout_plans,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = workout_plans)]
pub struct WorkoutPlanEntity {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workout_plans)]
pub struct InsertWorkoutPlanEntity {
    pub name: String,
    pub user_id: Uuid,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
}

#[derive(Debug, Clone, Insertable, Selectable, Queryable)]
#[diesel(table_name = workout_plan_exercises)]
pub struct WorkoutPlanExerciseEntity {
    pub workout_plan_id: Uuid,
    pub exercise_id: Uuid,
    pub duration_minutes: Option<i32>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
}

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = workout_logs)]
pub struct WorkoutLogEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_plan_id: Option<Uuid>,
    pub exercise_id: Option<Uuid>,
    pub logged_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workout_logs)]
pub struct InsertWorkoutLogEntity {
    pub user_id: Uuid,
    pub workout_plan_id: Option<Uuid>,
    pub exercise_id: Option<Uuid>,
    pub logged_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
