use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::{
    application::usecases::users::UsersUseCase,
    domain::{
        repositories::users::UserRepository,
        value_objects::users::{AccessTokenModel, LoginModel, RegisterUserModel},
    },
    infrastructure::{
        axum_http::{auth, auth::AuthUser, error_responses},
        postgres::{postgres_connection::PgPool, repositories::users::UserPostgres},
    },
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let user_repository = UserPostgres::new(Arc::clone(&db_pool));
    let users_usecase = UsersUseCase::new(Arc::new(user_repository));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/verify-token/:token", get(verify_token))
        .with_state(Arc::new(users_usecase))
}

pub async fn register<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    Json(register_user_model): Json<RegisterUserModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    match users_usecase.register(register_user_model).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn login<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    Json(login_model): Json<LoginModel>,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    let user = match users_usecase
        .authenticate(&login_model.username, &login_model.password)
        .await
    {
        Ok(user) => user,
        Err(err) => return error_responses::respond(err.status_code(), err.to_string()),
    };

    match auth::issue_token(user.id, user.role) {
        Ok(access_token) => Json(AccessTokenModel {
            access_token,
            token_type: "bearer".to_string(),
        })
        .into_response(),
        Err(err) => error_responses::respond(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

pub async fn verify_token(Path(token): Path<String>) -> impl IntoResponse {
    match auth::validate_token(&token) {
        Ok(claims) => Json(json!({
            "valid": true,
            "user_id": claims.sub,
            "role": claims.role,
        }))
        .into_response(),
        Err(err) => error_responses::respond(StatusCode::UNAUTHORIZED, err.to_string()),
    }
}

pub async fn me<U>(
    State(users_usecase): State<Arc<UsersUseCase<U>>>,
    auth_user: AuthUser,
) -> impl IntoResponse
where
    U: UserRepository + Send + Sync,
{
    match users_usecase.profile(auth_user.user_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
