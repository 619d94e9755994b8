use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    application::usecases::workout_plans::WorkoutPlansUseCase,
    domain::{
        repositories::{exercises::ExerciseRepository, workout_plans::WorkoutPlanRepository},
        value_objects::workout_plans::{
            AttachExerciseModel, CreateWorkoutLogModel, CreateWorkoutPlanModel,
        },
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses, routers::exercises::PaginationQuery},
        postgres::{
            postgres_connection::PgPool,
            repositories::{exercises::ExercisePostgres, workout_plans::WorkoutPlanPostgres},
        },
    },
};

#[derive(Debug, Deserialize)]
pub struct RenameWorkoutPlanModel {
    pub name: String,
}

fn build_usecase(
    db_pool: Arc<PgPool>,
) -> Arc<WorkoutPlansUseCase<WorkoutPlanPostgres, ExercisePostgres>> {
    let workout_plan_repository = WorkoutPlanPostgres::new(Arc::clone(&db_pool));
    let exercise_repository = ExercisePostgres::new(Arc::clone(&db_pool));
    Arc::new(WorkoutPlansUseCase::new(
        Arc::new(workout_plan_repository),
        Arc::new(exercise_repository),
    ))
}

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    Router::new()
        .route("/", post(create_plan))
        .route("/", get(list_plans))
        .route("/:workout_plan_id", get(get_plan))
        .route("/:workout_plan_id", put(rename_plan))
        .route("/:workout_plan_id", delete(delete_plan))
        .route(
            "/:workout_plan_id/exercises/:exercise_id",
            post(attach_exercise),
        )
        .route(
            "/:workout_plan_id/exercises/:exercise_id",
            delete(detach_exercise),
        )
        .with_state(build_usecase(db_pool))
}

pub fn log_routes(db_pool: Arc<PgPool>) -> Router {
    Router::new()
        .route("/", post(log_workout))
        .with_state(build_usecase(db_pool))
}

pub async fn create_plan<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    auth_user: AuthUser,
    Json(create_workout_plan_model): Json<CreateWorkoutPlanModel>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase
        .create_plan(auth_user.user_id, create_workout_plan_model)
        .await
    {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn list_plans<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    auth_user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase
        .list_plans(auth_user.user_id, pagination.skip, pagination.limit)
        .await
    {
        Ok(plans) => Json(plans).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn get_plan<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    _auth_user: AuthUser,
    Path(workout_plan_id): Path<Uuid>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase.get_plan(workout_plan_id).await {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn rename_plan<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    _auth_user: AuthUser,
    Path(workout_plan_id): Path<Uuid>,
    Json(rename_model): Json<RenameWorkoutPlanModel>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase
        .rename_plan(workout_plan_id, rename_model.name)
        .await
    {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn delete_plan<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    _auth_user: AuthUser,
    Path(workout_plan_id): Path<Uuid>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase.delete_plan(workout_plan_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn attach_exercise<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    _auth_user: AuthUser,
    Path((workout_plan_id, exercise_id)): Path<(Uuid, Uuid)>,
    Json(attach_exercise_model): Json<AttachExerciseModel>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase
        .attach_exercise(workout_plan_id, exercise_id, attach_exercise_model)
        .await
    {
        Ok(association) => (StatusCode::CREATED, Json(association)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn detach_exercise<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    _auth_user: AuthUser,
    Path((workout_plan_id, exercise_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase
        .detach_exercise(workout_plan_id, exercise_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn log_workout<W, E>(
    State(workout_plans_usecase): State<Arc<WorkoutPlansUseCase<W, E>>>,
    auth_user: AuthUser,
    Json(create_workout_log_model): Json<CreateWorkoutLogModel>,
) -> impl IntoResponse
where
    W: WorkoutPlanRepository + Send + Sync,
    E: ExerciseRepository + Send + Sync,
{
    match workout_plans_usecase
        .log_workout(auth_user.user_id, create_workout_log_model)
        .await
    {
        Ok(log) => (StatusCode::CREATED, Json(log)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
