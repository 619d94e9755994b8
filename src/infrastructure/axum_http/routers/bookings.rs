use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, patch},
};
use uuid::Uuid;

use crate::{
    application::usecases::bookings::BookingsUseCase,
    domain::{
        repositories::{bookings::BookingRepository, events::EventRepository},
        value_objects::enums::roles::UserRole,
    },
    infrastructure::{
        axum_http::{auth::AuthUser, error_responses},
        postgres::{
            postgres_connection::PgPool,
            repositories::{bookings::BookingPostgres, events::EventPostgres},
        },
    },
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let event_repository = EventPostgres::new(Arc::clone(&db_pool));
    let booking_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let bookings_usecase =
        BookingsUseCase::new(Arc::new(event_repository), Arc::new(booking_repository));

    Router::new()
        .route("/:booking_id/confirm", patch(confirm_booking))
        .route("/:booking_id", delete(cancel_booking))
        .with_state(Arc::new(bookings_usecase))
}

pub async fn confirm_booking<E, B>(
    State(bookings_usecase): State<Arc<BookingsUseCase<E, B>>>,
    auth_user: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
    B: BookingRepository + Send + Sync,
{
    if auth_user.role == UserRole::Member {
        return error_responses::forbidden();
    }

    match bookings_usecase.confirm_booking(booking_id).await {
        Ok(booking) => Json(booking).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn cancel_booking<E, B>(
    State(bookings_usecase): State<Arc<BookingsUseCase<E, B>>>,
    auth_user: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
    B: BookingRepository + Send + Sync,
{
    match bookings_usecase
        .cancel_booking(booking_id, auth_user.user_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
