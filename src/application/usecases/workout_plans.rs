use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    entities::workout_plans::WorkoutPlanExerciseEntity,
    repositories::{exercises::ExerciseRepository, workout_plans::WorkoutPlanRepository},
    value_objects::{
        exercises::ExerciseModel,
        workout_plans::{
            AttachExerciseModel, CreateWorkoutLogModel, CreateWorkoutPlanModel,
            PlannedExerciseModel, WorkoutLogModel, WorkoutPlanExerciseModel, WorkoutPlanModel,
            WorkoutPlanWithExercisesModel,
        },
    },
};

#[derive(Debug, Error)]
pub enum WorkoutPlanError {
    #[error("workout plan not found")]
    PlanNotFound,
    #[error("exercise not found")]
    ExerciseNotFound,
    #[error("exercise is not part of this workout plan")]
    NotAttached,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WorkoutPlanError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            WorkoutPlanError::PlanNotFound
            | WorkoutPlanError::ExerciseNotFound
            | WorkoutPlanError::NotAttached => StatusCode::NOT_FOUND,
            WorkoutPlanError::Validation(_) => StatusCode::BAD_REQUEST,
            WorkoutPlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type WorkoutPlanResult<T> = Result<T, WorkoutPlanError>;

pub struct WorkoutPlansUseCase<W, E>
where
    W: WorkoutPlanRepository + Send + Sync + 'static,
    E: ExerciseRepository + Send + Sync + 'static,
{
    workout_plan_repo: Arc<W>,
    exercise_repo: Arc<E>,
}

impl<W, E> WorkoutPlansUseCase<W, E>
where
    W: WorkoutPlanRepository + Send + Sync + 'static,
    E: ExerciseRepository + Send + Sync + 'static,
{
    pub fn new(workout_plan_repo: Arc<W>, exercise_repo: Arc<E>) -> Self {
        Self {
            workout_plan_repo,
            exercise_repo,
        }
    }

    pub async fn create_plan(
        &self,
        user_id: Uuid,
        model: CreateWorkoutPlanModel,
    ) -> WorkoutPlanResult<WorkoutPlanModel> {
        if model.name.trim().is_empty() {
            return Err(WorkoutPlanError::Validation(
                "name must not be empty".to_string(),
            ));
        }
        let plan = self.workout_plan_repo.create(model.to_entity(user_id)).await?;
        info!(plan_id = %plan.id, %user_id, "workout_plans: plan created");
        Ok(WorkoutPlanModel::from(plan))
    }

    pub async fn list_plans(
        &self,
        user_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> WorkoutPlanResult<Vec<WorkoutPlanWithExercisesModel>> {
        let plans = self
            .workout_plan_repo
            .list_for_user(user_id, skip, limit)
            .await?;

        let mut result = Vec::with_capacity(plans.len());
        for plan in plans {
            let exercises = self.planned_exercises(plan.id).await?;
            result.push(WorkoutPlanWithExercisesModel {
                plan: WorkoutPlanModel::from(plan),
                exercises,
            });
        }
        Ok(result)
    }

    pub async fn get_plan(
        &self,
        workout_plan_id: Uuid,
    ) -> WorkoutPlanResult<WorkoutPlanWithExercisesModel> {
        let plan = self
            .workout_plan_repo
            .find_by_id(workout_plan_id)
            .await?
            .ok_or(WorkoutPlanError::PlanNotFound)?;

        let exercises = self.planned_exercises(plan.id).await?;
        Ok(WorkoutPlanWithExercisesModel {
            plan: WorkoutPlanModel::from(plan),
            exercises,
        })
    }

    pub async fn rename_plan(
        &self,
        workout_plan_id: Uuid,
        name: String,
    ) -> WorkoutPlanResult<WorkoutPlanModel> {
        if name.trim().is_empty() {
            return Err(WorkoutPlanError::Validation(
                "name must not be empty".to_string(),
            ));
        }
        let plan = self
            .workout_plan_repo
            .rename(workout_plan_id, name)
            .await?
            .ok_or(WorkoutPlanError::PlanNotFound)?;
        info!(%workout_plan_id, "workout_plans: plan renamed");
        Ok(WorkoutPlanModel::from(plan))
    }

    pub async fn delete_plan(&self, workout_plan_id: Uuid) -> WorkoutPlanResult<()> {
        if !self.workout_plan_repo.delete(workout_plan_id).await? {
            return Err(WorkoutPlanError::PlanNotFound);
        }
        info!(%workout_plan_id, "workout_plans: plan deleted");
        Ok(())
    }

    /// Both sides of the association must exist before the row is written.
    pub async fn attach_exercise(
        &self,
        workout_plan_id: Uuid,
        exercise_id: Uuid,
        model: AttachExerciseModel,
    ) -> WorkoutPlanResult<WorkoutPlanExerciseModel> {
        self.workout_plan_repo
            .find_by_id(workout_plan_id)
            .await?
            .ok_or(WorkoutPlanError::PlanNotFound)?;
        self.exercise_repo
            .find_by_id(exercise_id)
            .await?
            .ok_or(WorkoutPlanError::ExerciseNotFound)?;

        let association = self
            .workout_plan_repo
            .attach_exercise(WorkoutPlanExerciseEntity {
                workout_plan_id,
                exercise_id,
                duration_minutes: model.duration_minutes,
                repetitions: model.repetitions,
                sets: model.sets,
            })
            .await?;

        info!(%workout_plan_id, %exercise_id, "workout_plans: exercise attached");
        Ok(WorkoutPlanExerciseModel::from(association))
    }

    pub async fn detach_exercise(
        &self,
        workout_plan_id: Uuid,
        exercise_id: Uuid,
    ) -> WorkoutPlanResult<()> {
        if !self
            .workout_plan_repo
            .detach_exercise(workout_plan_id, exercise_id)
            .await?
        {
            return Err(WorkoutPlanError::NotAttached);
        }
        info!(%workout_plan_id, %exercise_id, "workout_plans: exercise detached");
        Ok(())
    }

    pub async fn log_workout(
        &self,
        user_id: Uuid,
        model: CreateWorkoutLogModel,
    ) -> WorkoutPlanResult<WorkoutLogModel> {
        if let Some(workout_plan_id) = model.workout_plan_id {
            self.workout_plan_repo
                .find_by_id(workout_plan_id)
                .await?
                .ok_or(WorkoutPlanError::PlanNotFound)?;
        }
        if let Some(exercise_id) = model.exercise_id {
            self.exercise_repo
                .find_by_id(exercise_id)
                .await?
                .ok_or(WorkoutPlanError::ExerciseNotFound)?;
        }

        let log = self
            .workout_plan_repo
            .create_log(model.to_entity(user_id))
            .await?;
        info!(log_id = %log.id, %user_id, "workout_plans: workout logged");
        Ok(WorkoutLogModel::from(log))
    }

    async fn planned_exercises(
        &self,
        workout_plan_id: Uuid,
    ) -> WorkoutPlanResult<Vec<PlannedExerciseModel>> {
        let rows = self.workout_plan_repo.list_exercises(workout_plan_id).await?;
        Ok(rows
            .into_iter()
            .map(|(association, exercise)| PlannedExerciseModel {
                exercise: ExerciseModel::from(exercise),
                duration_minutes: association.duration_minutes,
                repetitions: association.repetitions,
                sets: association.sets,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{exercises::ExerciseEntity, workout_plans::WorkoutPlanEntity},
        repositories::{
            exercises::MockExerciseRepository, workout_plans::MockWorkoutPlanRepository,
        },
    };

    fn plan_entity(id: Uuid, user_id: Uuid) -> WorkoutPlanEntity {
        WorkoutPlanEntity {
            id,
            name: "Push day".to_string(),
            user_id,
            start_time: None,
            end_time: None,
            duration_minutes: Some(60),
        }
    }

    fn exercise_entity(id: Uuid) -> ExerciseEntity {
        ExerciseEntity {
            id,
            name: "Bench press".to_string(),
            description: None,
            duration_minutes: Some(10),
            sets: Some(3),
            reps: Some(8),
            muscles: Some("chest".to_string()),
        }
    }

    #[tokio::test]
    async fn blank_plan_name_is_rejected() {
        let usecase = WorkoutPlansUseCase::new(
            Arc::new(MockWorkoutPlanRepository::new()),
            Arc::new(MockExerciseRepository::new()),
        );

        let result = usecase
            .create_plan(
                Uuid::new_v4(),
                CreateWorkoutPlanModel {
                    name: "".to_string(),
                    start_time: None,
                    end_time: None,
                    duration_minutes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(WorkoutPlanError::Validation(_))));
    }

    #[tokio::test]
    async fn attaching_to_missing_plan_is_plan_not_found() {
        let mut workout_plan_repo = MockWorkoutPlanRepository::new();
        workout_plan_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = WorkoutPlansUseCase::new(
            Arc::new(workout_plan_repo),
            Arc::new(MockExerciseRepository::new()),
        );

        let result = usecase
            .attach_exercise(
                Uuid::new_v4(),
                Uuid::new_v4(),
                AttachExerciseModel {
                    duration_minutes: None,
                    repetitions: None,
                    sets: None,
                },
            )
            .await;

        assert!(matches!(result, Err(WorkoutPlanError::PlanNotFound)));
    }

    #[tokio::test]
    async fn attaching_missing_exercise_is_exercise_not_found() {
        let plan_id = Uuid::new_v4();
        let mut workout_plan_repo = MockWorkoutPlanRepository::new();
        workout_plan_repo.expect_find_by_id().returning(move |id| {
            let plan = plan_entity(id, Uuid::new_v4());
            Box::pin(async move { Ok(Some(plan)) })
        });
        let mut exercise_repo = MockExerciseRepository::new();
        exercise_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase =
            WorkoutPlansUseCase::new(Arc::new(workout_plan_repo), Arc::new(exercise_repo));

        let result = usecase
            .attach_exercise(
                plan_id,
                Uuid::new_v4(),
                AttachExerciseModel {
                    duration_minutes: None,
                    repetitions: None,
                    sets: None,
                },
            )
            .await;

        assert!(matches!(result, Err(WorkoutPlanError::ExerciseNotFound)));
    }

    #[tokio::test]
    async fn attach_echoes_the_association_row() {
        let plan_id = Uuid::new_v4();
        let exercise_id = Uuid::new_v4();

        let mut workout_plan_repo = MockWorkoutPlanRepository::new();
        workout_plan_repo.expect_find_by_id().returning(move |id| {
            let plan = plan_entity(id, Uuid::new_v4());
            Box::pin(async move { Ok(Some(plan)) })
        });
        workout_plan_repo
            .expect_attach_exercise()
            .returning(|association| Box::pin(async move { Ok(association) }));

        let mut exercise_repo = MockExerciseRepository::new();
        exercise_repo.expect_find_by_id().returning(move |id| {
            let exercise = exercise_entity(id);
            Box::pin(async move { Ok(Some(exercise)) })
        });

        let usecase =
            WorkoutPlansUseCase::new(Arc::new(workout_plan_repo), Arc::new(exercise_repo));

        let association = usecase
            .attach_exercise(
                plan_id,
                exercise_id,
                AttachExerciseModel {
                    duration_minutes: Some(12),
                    repetitions: Some(8),
                    sets: Some(3),
                },
            )
            .await
            .unwrap();

        assert_eq!(association.workout_plan_id, plan_id);
        assert_eq!(association.exercise_id, exercise_id);
        assert_eq!(association.sets, Some(3));
    }

    #[tokio::test]
    async fn detaching_unattached_exercise_is_not_attached() {
        let mut workout_plan_repo = MockWorkoutPlanRepository::new();
        workout_plan_repo
            .expect_detach_exercise()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let usecase = WorkoutPlansUseCase::new(
            Arc::new(workout_plan_repo),
            Arc::new(MockExerciseRepository::new()),
        );

        let result = usecase
            .detach_exercise(Uuid::new_v4(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(WorkoutPlanError::NotAttached)));
    }

    #[tokio::test]
    async fn listing_joins_exercises_onto_each_plan() {
        let user_id = Uuid::new_v4();
        let plan_id = Uuid::new_v4();
        let exercise_id = Uuid::new_v4();

        let mut workout_plan_repo = MockWorkoutPlanRepository::new();
        workout_plan_repo
            .expect_list_for_user()
            .returning(move |user_id, _, _| {
                let plans = vec![plan_entity(plan_id, user_id)];
                Box::pin(async move { Ok(plans) })
            });
        workout_plan_repo.expect_list_exercises().returning(move |id| {
            let rows = vec![(
                WorkoutPlanExerciseEntity {
                    workout_plan_id: id,
                    exercise_id,
                    duration_minutes: Some(10),
                    repetitions: Some(8),
                    sets: Some(3),
                },
                exercise_entity(exercise_id),
            )];
            Box::pin(async move { Ok(rows) })
        });

        let usecase = WorkoutPlansUseCase::new(
            Arc::new(workout_plan_repo),
            Arc::new(MockExerciseRepository::new()),
        );

        let plans = usecase.list_plans(user_id, 0, 20).await.unwrap();

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].exercises.len(), 1);
        assert_eq!(plans[0].exercises[0].exercise.name, "Bench press");
    }

    #[tokio::test]
    async fn logging_against_missing_plan_is_plan_not_found() {
        let mut workout_plan_repo = MockWorkoutPlanRepository::new();
        workout_plan_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = WorkoutPlansUseCase::new(
            Arc::new(workout_plan_repo),
            Arc::new(MockExerciseRepository::new()),
        );

        let result = usecase
            .log_workout(
                Uuid::new_v4(),
                CreateWorkoutLogModel {
                    workout_plan_id: Some(Uuid::new_v4()),
                    exercise_id: None,
                    logged_on: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    notes: None,
                },
            )
            .await;

        assert!(matches!(result, Err(WorkoutPlanError::PlanNotFound)));
    }
}
