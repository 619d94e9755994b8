use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    repositories::exercises::ExerciseRepository,
    value_objects::exercises::{ExerciseModel, UpsertExerciseModel},
};

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("exercise not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ExerciseError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ExerciseError::NotFound => StatusCode::NOT_FOUND,
            ExerciseError::Validation(_) => StatusCode::BAD_REQUEST,
            ExerciseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type ExerciseResult<T> = Result<T, ExerciseError>;

pub struct ExercisesUseCase<E>
where
    E: ExerciseRepository + Send + Sync + 'static,
{
    exercise_repo: Arc<E>,
}

impl<E> ExercisesUseCase<E>
where
    E: ExerciseRepository + Send + Sync + 'static,
{
    pub fn new(exercise_repo: Arc<E>) -> Self {
        Self { exercise_repo }
    }

    fn validate(model: &UpsertExerciseModel) -> ExerciseResult<()> {
        if model.name.trim().is_empty() {
            return Err(ExerciseError::Validation(
                "name must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("duration_minutes", model.duration_minutes),
            ("sets", model.sets),
            ("reps", model.reps),
        ] {
            if let Some(value) = value {
                if value < 1 {
                    return Err(ExerciseError::Validation(format!(
                        "{} must be at least 1",
                        field
                    )));
                }
            }
        }
        Ok(())
    }

    pub async fn create_exercise(
        &self,
        model: UpsertExerciseModel,
    ) -> ExerciseResult<ExerciseModel> {
        Self::validate(&model)?;
        let exercise = self.exercise_repo.create(model.to_entity()).await?;
        info!(exercise_id = %exercise.id, "exercises: exercise created");
        Ok(ExerciseModel::from(exercise))
    }

    pub async fn list_exercises(&self, skip: i64, limit: i64) -> ExerciseResult<Vec<ExerciseModel>> {
        let exercises = self.exercise_repo.list(skip, limit).await?;
        Ok(exercises.into_iter().map(ExerciseModel::from).collect())
    }

    pub async fn get_exercise(&self, exercise_id: Uuid) -> ExerciseResult<ExerciseModel> {
        let exercise = self
            .exercise_repo
            .find_by_id(exercise_id)
            .await?
            .ok_or(ExerciseError::NotFound)?;
        Ok(ExerciseModel::from(exercise))
    }

    pub async fn update_exercise(
        &self,
        exercise_id: Uuid,
        model: UpsertExerciseModel,
    ) -> ExerciseResult<ExerciseModel> {
        Self::validate(&model)?;
        let exercise = self
            .exercise_repo
            .update(exercise_id, model.to_entity())
            .await?
            .ok_or(ExerciseError::NotFound)?;
        info!(%exercise_id, "exercises: exercise updated");
        Ok(ExerciseModel::from(exercise))
    }

    pub async fn delete_exercise(&self, exercise_id: Uuid) -> ExerciseResult<()> {
        if !self.exercise_repo.delete(exercise_id).await? {
            return Err(ExerciseError::NotFound);
        }
        info!(%exercise_id, "exercises: exercise deleted");
        Ok(())
    }
}
