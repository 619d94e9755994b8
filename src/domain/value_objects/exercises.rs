use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::exercises::{ExerciseEntity, UpsertExerciseEntity};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExerciseModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub muscles: Option<String>,
}

impl From<ExerciseEntity> for ExerciseModel {
    fn from(entity: ExerciseEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            duration_minutes: entity.duration_minutes,
            sets: entity.sets,
            reps: entity.reps,
            muscles: entity.muscles,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertExerciseModel {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub muscles: Option<String>,
}

impl UpsertExerciseModel {
    pub fn to_entity(&self) -> UpsertExerciseEntity {
        UpsertExerciseEntity {
            name: self.name.clone(),
            description: self.description.clone(),
            duration_minutes: self.duration_minutes,
            sets: self.sets,
            reps: self.reps,
            muscles: self.muscles.clone(),
        }
    }
}
