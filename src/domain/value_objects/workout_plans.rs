use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::workout_plans::{
        InsertWorkoutLogEntity, InsertWorkoutPlanEntity, WorkoutLogEntity,
        WorkoutPlanEntity, WorkoutPlanExerciseEntity,
    },
    value_objects::exercises::ExerciseModel,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutPlanModel {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
}

impl From<WorkoutPlanEntity> for WorkoutPlanModel {
    fn from(entity: WorkoutPlanEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            user_id: entity.user_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration_minutes: entity.duration_minutes,
        }
    }
}

/// A plan with its exercises joined in, mirroring the list endpoint shape.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlanWithExercisesModel {
    #[serde(flatten)]
    pub plan: WorkoutPlanModel,
    pub exercises: Vec<PlannedExerciseModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedExerciseModel {
    pub exercise: ExerciseModel,
    pub duration_minutes: Option<i32>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutPlanExerciseModel {
    pub workout_plan_id: Uuid,
    pub exercise_id: Uuid,
    pub duration_minutes: Option<i32>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
}

impl From<WorkoutPlanExerciseEntity> for WorkoutPlanExerciseModel {
    fn from(entity: WorkoutPlanExerciseEntity) -> Self {
        Self {
            workout_plan_id: entity.workout_plan_id,
            exercise_id: entity.exercise_id,
            duration_minutes: entity.duration_minutes,
            repetitions: entity.repetitions,
            sets: entity.sets,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutPlanModel {
    pub name: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
}

impl CreateWorkoutPlanModel {
    pub fn to_entity(&self, user_id: Uuid) -> InsertWorkoutPlanEntity {
        InsertWorkoutPlanEntity {
            name: self.name.clone(),
            user_id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes: self.duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachExerciseModel {
    pub duration_minutes: Option<i32>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutLogModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_plan_id: Option<Uuid>,
    pub exercise_id: Option<Uuid>,
    pub logged_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<WorkoutLogEntity> for WorkoutLogModel {
    fn from(entity: WorkoutLogEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            workout_plan_id: entity.workout_plan_id,
            exercise_id: entity.exercise_id,
            logged_on: entity.logged_on,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutLogModel {
    pub workout_plan_id: Option<Uuid>,
    pub exercise_id: Option<Uuid>,
    pub logged_on: NaiveDate,
    pub notes: Option<String>,
}

impl CreateWorkoutLogModel {
    pub fn to_entity(&self, user_id: Uuid) -> InsertWorkoutLogEntity {
        InsertWorkoutLogEntity {
            user_id,
            workout_plan_id: self.workout_plan_id,
            exercise_id: self.exercise_id,
            logged_on: self.logged_on,
            notes: self.notes.clone(),
            created_at: Utc::now(),
        }
    }
}
