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
    application::usecases::exercises::ExercisesUseCase,
    domain::{
        repositories::exercises::ExerciseRepository,
        value_objects::{enums::roles::UserRole, exercises::UpsertExerciseModel},
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses},
        postgres::{postgres_connection::PgPool, repositories::exercises::ExercisePostgres},
    },
};

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let exercise_repository = ExercisePostgres::new(Arc::clone(&db_pool));
    let exercises_usecase = ExercisesUseCase::new(Arc::new(exercise_repository));

    Router::new()
        .route("/", post(create_exercise))
        .route("/", get(list_exercises))
        .route("/:exercise_id", get(get_exercise))
        .route("/:exercise_id", put(update_exercise))
        .route("/:exercise_id", delete(delete_exercise))
        .with_state(Arc::new(exercises_usecase))
}

pub async fn create_exercise<E>(
    State(exercises_usecase): State<Arc<ExercisesUseCase<E>>>,
    auth_user: AuthUser,
    Json(upsert_exercise_model): Json<UpsertExerciseModel>,
) -> impl IntoResponse
where
    E: ExerciseRepository + Send + Sync,
{
    if auth_user.role == UserRole::Member {
        return error_responses::forbidden();
    }

    match exercises_usecase.create_exercise(upsert_exercise_model).await {
        Ok(exercise) => (StatusCode::CREATED, Json(exercise)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn list_exercises<E>(
    State(exercises_usecase): State<Arc<ExercisesUseCase<E>>>,
    _auth_user: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> impl IntoResponse
where
    E: ExerciseRepository + Send + Sync,
{
    match exercises_usecase
        .list_exercises(pagination.skip, pagination.limit)
        .await
    {
        Ok(exercises) => Json(exercises).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn get_exercise<E>(
    State(exercises_usecase): State<Arc<ExercisesUseCase<E>>>,
    _auth_user: AuthUser,
    Path(exercise_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: ExerciseRepository + Send + Sync,
{
    match exercises_usecase.get_exercise(exercise_id).await {
        Ok(exercise) => Json(exercise).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn update_exercise<E>(
    State(exercises_usecase): State<Arc<ExercisesUseCase<E>>>,
    auth_user: AuthUser,
    Path(exercise_id): Path<Uuid>,
    Json(upsert_exercise_model): Json<UpsertExerciseModel>,
) -> impl IntoResponse
where
    E: ExerciseRepository + Send + Sync,
{
    if auth_user.role == UserRole::Member {
        return error_responses::forbidden();
    }

    match exercises_usecase
        .update_exercise(exercise_id, upsert_exercise_model)
        .await
    {
        Ok(exercise) => Json(exercise).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn delete_exercise<E>(
    State(exercises_usecase): State<Arc<ExercisesUseCase<E>>>,
    auth_user: AuthUser,
    Path(exercise_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: ExerciseRepository + Send + Sync,
{
    if auth_user.role == UserRole::Member {
        return error_responses::forbidden();
    }

    match exercises_usecase.delete_exercise(exercise_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
