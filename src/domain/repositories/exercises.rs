use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::exercises::{ExerciseEntity, UpsertExerciseEntity};

#[async_trait]
#[automock]
pub trait ExerciseRepository {
    async fn create(&self, upsert_exercise_entity: UpsertExerciseEntity)
    -> Result<ExerciseEntity>;
    async fn find_by_id(&self, exercise_id: Uuid) -> Result<Option<ExerciseEntity>>;
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<ExerciseEntity>>;
    async fn update(
        &self,
        exercise_id: Uuid,
        upsert_exercise_entity: UpsertExerciseEntity,
    ) -> Result<Option<ExerciseEntity>>;
    async fn delete(&self, exercise_id: Uuid) -> Result<bool>;
}
