use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    exercises::ExerciseEntity,
    workout_plans::{
        InsertWorkoutLogEntity, InsertWorkoutPlanEntity, WorkoutLogEntity,
        WorkoutPlanEntity, WorkoutPlanExerciseEntity,
    },
};

#[async_trait]
#[automock]
pub trait WorkoutPlanRepository {
    async fn create(
        &self,
        insert_workout_plan_entity: InsertWorkoutPlanEntity,
    ) -> Result<WorkoutPlanEntity>;
    async fn find_by_id(&self, workout_plan_id: Uuid) -> Result<Option<WorkoutPlanEntity>>;
    async fn list_for_user(
        &self,
        user_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<WorkoutPlanEntity>>;
    async fn rename(&self, workout_plan_id: Uuid, name: String)
    -> Result<Option<WorkoutPlanEntity>>;
    async fn delete(&self, workout_plan_id: Uuid) -> Result<bool>;

    async fn attach_exercise(
        &self,
        association: WorkoutPlanExerciseEntity,
    ) -> Result<WorkoutPlanExerciseEntity>;
    async fn detach_exercise(&self, workout_plan_id: Uuid, exercise_id: Uuid) -> Result<bool>;
    async fn list_exercises(
        &self,
        workout_plan_id: Uuid,
    ) -> Result<Vec<(WorkoutPlanExerciseEntity, ExerciseEntity)>>;

    async fn create_log(
        &self,
        insert_workout_log_entity: InsertWorkoutLogEntity,
    ) -> Result<WorkoutLogEntity>;
}
