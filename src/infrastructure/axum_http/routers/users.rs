use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use uuid::Uuid;

use crate::{
    application::usecases::users::UsersUseCase,
    domain::{
        repositories::users::UserRepository,
        value_objects::{enums::roles::UserRole, users::RegisterUserModel},
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses},
        postgres::{postgres_connection::PgPool, repositories::users::UserPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let users_usecase = UsersUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/", get(list_users))
        .route("/:user_id", get(get_user))
        .route("/:user_id", put(update_user))
        .route("/:user_id", delete(delete_user))
        .with_state(Arc::new(users_usecase))
}

pub async fn list_users<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    auth_user: AuthUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match users_usecase.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn get_user<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    auth_user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin && auth_user.user_id != user_id {
        return error_responses::forbidden();
    }

    match users_usecase.profile(user_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn update_user<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    auth_user: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(register_user_model): Json<RegisterUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin && auth_user.user_id != user_id {
        return error_responses::forbidden();
    }

    match users_usecase.update_user(user_id, register_user_model).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn delete_user<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    auth_user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match users_usecase.delete_user(user_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
