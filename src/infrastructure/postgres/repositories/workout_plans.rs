use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            exercises::ExerciseEntity,
            workout_plans::{
                InsertWorkoutLogEntity, InsertWorkoutPlanEntity, WorkoutLogEntity,
                WorkoutPlanEntity, WorkoutPlanExerciseEntity,
            },
        },
        repositories::workout_plans::WorkoutPlanRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPool,
        schema::{exercises, workout_logs, workout_plan_exercises, workout_plans},
    },
};

pub struct WorkoutPlanPostgres {
    db_pool: Arc<PgPool>,
}

impl WorkoutPlanPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WorkoutPlanRepository for WorkoutPlanPostgres {
    async fn create(
        &self,
        insert_workout_plan_entity: InsertWorkoutPlanEntity,
    ) -> Result<WorkoutPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = insert_into(workout_plans::table)
            .values(&insert_workout_plan_entity)
            .returning(WorkoutPlanEntity::as_returning())
            .get_result::<WorkoutPlanEntity>(&mut conn)?;

        Ok(plan)
    }

    async fn find_by_id(&self, workout_plan_id: Uuid) -> Result<Option<WorkoutPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = workout_plans::table
            .find(workout_plan_id)
            .select(WorkoutPlanEntity::as_select())
            .first::<WorkoutPlanEntity>(&mut conn)
            .optional()?;

        Ok(plan)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<WorkoutPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = workout_plans::table
            .filter(workout_plans::user_id.eq(user_id))
            .select(WorkoutPlanEntity::as_select())
            .order(workout_plans::name.asc())
            .offset(skip)
            .limit(limit)
            .load::<WorkoutPlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn rename(
        &self,
        workout_plan_id: Uuid,
        name: String,
    ) -> Result<Option<WorkoutPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = update(workout_plans::table.find(workout_plan_id))
            .set(workout_plans::name.eq(name))
            .returning(WorkoutPlanEntity::as_returning())
            .get_result::<WorkoutPlanEntity>(&mut conn)
            .optional()?;

        Ok(plan)
    }

    async fn delete(&self, workout_plan_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted =
            delete(workout_plans::table.find(workout_plan_id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn attach_exercise(
        &self,
        association: WorkoutPlanExerciseEntity,
    ) -> Result<WorkoutPlanExerciseEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = insert_into(workout_plan_exercises::table)
            .values(&association)
            .returning(WorkoutPlanExerciseEntity::as_returning())
            .get_result::<WorkoutPlanExerciseEntity>(&mut conn)?;

        Ok(row)
    }

    async fn detach_exercise(&self, workout_plan_id: Uuid, exercise_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(
            workout_plan_exercises::table
                .filter(workout_plan_exercises::workout_plan_id.eq(workout_plan_id))
                .filter(workout_plan_exercises::exercise_id.eq(exercise_id)),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn list_exercises(
        &self,
        workout_plan_id: Uuid,
    ) -> Result<Vec<(WorkoutPlanExerciseEntity, ExerciseEntity)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = workout_plan_exercises::table
            .inner_join(exercises::table)
            .filter(workout_plan_exercises::workout_plan_id.eq(workout_plan_id))
            .select((
                WorkoutPlanExerciseEntity::as_select(),
                ExerciseEntity::as_select(),
            ))
            .load::<(WorkoutPlanExerciseEntity, ExerciseEntity)>(&mut conn)?;

        Ok(results)
    }

    async fn create_log(
        &self,
        insert_workout_log_entity: InsertWorkoutLogEntity,
    ) -> Result<WorkoutLogEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let log = insert_into(workout_logs::table)
            .values(&insert_workout_log_entity)
            .returning(WorkoutLogEntity::as_returning())
            .get_result::<WorkoutLogEntity>(&mut conn)?;

        Ok(log)
    }
}
