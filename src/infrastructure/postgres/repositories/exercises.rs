use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::exercises::{ExerciseEntity, UpsertExerciseEntity},
        repositories::exercises::ExerciseRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::exercises},
};

pub struct ExercisePostgres {
    db_pool: Arc<PgPool>,
}

impl ExercisePostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ExerciseRepository for ExercisePostgres {
    async fn create(
        &self,
        upsert_exercise_entity: UpsertExerciseEntity,
    ) -> Result<ExerciseEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let exercise = insert_into(exercises::table)
            .values(&upsert_exercise_entity)
            .returning(ExerciseEntity::as_returning())
            .get_result::<ExerciseEntity>(&mut conn)?;

        Ok(exercise)
    }

    async fn find_by_id(&self, exercise_id: Uuid) -> Result<Option<ExerciseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let exercise = exercises::table
            .find(exercise_id)
            .select(ExerciseEntity::as_select())
            .first::<ExerciseEntity>(&mut conn)
            .optional()?;

        Ok(exercise)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<ExerciseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = exercises::table
            .select(ExerciseEntity::as_select())
            .order(exercises::name.asc())
            .offset(skip)
            .limit(limit)
            .load::<ExerciseEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        exercise_id: Uuid,
        upsert_exercise_entity: UpsertExerciseEntity,
    ) -> Result<Option<ExerciseEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let exercise = update(exercises::table.find(exercise_id))
            .set(&upsert_exercise_entity)
            .returning(ExerciseEntity::as_returning())
            .get_result::<ExerciseEntity>(&mut conn)
            .optional()?;

        Ok(exercise)
    }

    async fn delete(&self, exercise_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(exercises::table.find(exercise_id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
