use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::usecases::subscriptions::SubscriptionsUseCase,
    domain::{
        repositories::{
            membership_plans::MembershipPlanRepository, subscriptions::SubscriptionRepository,
        },
        value_objects::{
            enums::roles::UserRole,
            subscriptions::{CreateSubscriptionModel, EditSubscriptionModel},
        },
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses},
        postgres::{
            postgres_connection::PgPool,
            repositories::{
                membership_plans::MembershipPlanPostgres, subscriptions::SubscriptionPostgres,
            },
        },
    },
};

fn build_usecase(
    db_pool: Arc<PgPool>,
) -> Arc<SubscriptionsUseCase<SubscriptionPostgres, MembershipPlanPostgres>> {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let plan_repository = MembershipPlanPostgres::new(Arc::clone(&db_pool));
    Arc::new(SubscriptionsUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(plan_repository),
    ))
}

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    Router::new()
        .route("/", post(create_subscription))
        .route("/:subscription_id", put(update_subscription))
        .route("/:subscription_id", delete(cancel_subscription))
        .route("/:subscription_id/status", get(membership_status))
        .with_state(build_usecase(db_pool))
}

/// Mounted under the users router so listing reads as
/// `/users/{user_id}/subscriptions`.
pub fn user_routes(db_pool: Arc<PgPool>) -> Router {
    Router::new()
        .route("/:user_id/subscriptions", get(list_for_user))
        .with_state(build_usecase(db_pool))
}

pub async fn create_subscription<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    auth_user: AuthUser,
    Json(create_subscription_model): Json<CreateSubscriptionModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync,
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin
        && auth_user.user_id != create_subscription_model.user_id
    {
        return error_responses::forbidden();
    }

    match subscriptions_usecase
        .create_subscription(create_subscription_model)
        .await
    {
        Ok(subscription) => (StatusCode::CREATED, Json(subscription)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn list_for_user<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    auth_user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync,
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin && auth_user.user_id != user_id {
        return error_responses::forbidden();
    }

    match subscriptions_usecase.list_for_user(user_id).await {
        Ok(subscriptions) => Json(subscriptions).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn update_subscription<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    auth_user: AuthUser,
    Path(subscription_id): Path<Uuid>,
    Json(edit_subscription_model): Json<EditSubscriptionModel>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync,
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match subscriptions_usecase
        .update_subscription(subscription_id, edit_subscription_model)
        .await
    {
        Ok(subscription) => Json(subscription).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn cancel_subscription<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    auth_user: AuthUser,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync,
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match subscriptions_usecase
        .cancel_subscription(subscription_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn membership_status<S, P>(
    State(subscriptions_usecase): State<Arc<SubscriptionsUseCase<S, P>>>,
    _auth_user: AuthUser,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync,
    P: MembershipPlanRepository + Send + Sync,
{
    match subscriptions_usecase.membership_status(subscription_id).await {
        Ok(status) => Json(json!({ "status": status })).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
