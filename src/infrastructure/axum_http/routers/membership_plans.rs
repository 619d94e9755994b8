use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    application::usecases::membership_plans::MembershipPlansUseCase,
    domain::{
        repositories::membership_plans::MembershipPlanRepository,
        value_objects::{
            enums::roles::UserRole, membership_plans::UpsertMembershipPlanModel,
        },
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses},
        postgres::{
            postgres_connection::PgPool, repositories::membership_plans::MembershipPlanPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let plan_repository = MembershipPlanPostgres::new(Arc::clone(&db_pool));
    let plans_usecase = MembershipPlansUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", post(create_plan))
        .route("/", get(list_plans))
        .route("/:plan_id", get(get_plan))
        .route("/:plan_id", put(update_plan))
        .route("/:plan_id", delete(delete_plan))
        .with_state(Arc::new(plans_usecase))
}

pub async fn create_plan<P>(
    State(plans_usecase): State<Arc<MembershipPlansUseCase<P>>>,
    auth_user: AuthUser,
    Json(upsert_plan_model): Json<UpsertMembershipPlanModel>,
) -> impl IntoResponse
where
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match plans_usecase.create_plan(upsert_plan_model).await {
        Ok(plan) => (StatusCode::CREATED, Json(plan)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn list_plans<P>(
    State(plans_usecase): State<Arc<MembershipPlansUseCase<P>>>,
    _auth_user: AuthUser,
) -> impl IntoResponse
where
    P: MembershipPlanRepository + Send + Sync,
{
    match plans_usecase.list_plans().await {
        Ok(plans) => Json(plans).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn get_plan<P>(
    State(plans_usecase): State<Arc<MembershipPlansUseCase<P>>>,
    _auth_user: AuthUser,
    Path(plan_id): Path<Uuid>,
) -> impl IntoResponse
where
    P: MembershipPlanRepository + Send + Sync,
{
    match plans_usecase.get_plan(plan_id).await {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn update_plan<P>(
    State(plans_usecase): State<Arc<MembershipPlansUseCase<P>>>,
    auth_user: AuthUser,
    Path(plan_id): Path<Uuid>,
    Json(upsert_plan_model): Json<UpsertMembershipPlanModel>,
) -> impl IntoResponse
where
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match plans_usecase.update_plan(plan_id, upsert_plan_model).await {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn delete_plan<P>(
    State(plans_usecase): State<Arc<MembershipPlansUseCase<P>>>,
    auth_user: AuthUser,
    Path(plan_id): Path<Uuid>,
) -> impl IntoResponse
where
    P: MembershipPlanRepository + Send + Sync,
{
    if auth_user.role != UserRole::Admin {
        return error_responses::forbidden();
    }

    match plans_usecase.delete_plan(plan_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
