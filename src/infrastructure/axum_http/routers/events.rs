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
    application::usecases::{bookings::BookingsUseCase, events::EventsUseCase},
    domain::{
        repositories::{bookings::BookingRepository, events::EventRepository},
        value_objects::events::{CreateEventModel, EditEventModel},
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
    let events_usecase = EventsUseCase::new(Arc::new(event_repository));

    let booking_event_repository = EventPostgres::new(Arc::clone(&db_pool));
    let booking_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let bookings_usecase = BookingsUseCase::new(
        Arc::new(booking_event_repository),
        Arc::new(booking_repository),
    );

    Router::new()
        .route("/", post(create_event))
        .route("/", get(list_events))
        .route("/:event_id", get(get_event))
        .route("/:event_id", put(update_event))
        .route("/:event_id", delete(delete_event))
        .with_state(Arc::new(events_usecase))
        .merge(
            Router::new()
                .route("/:event_id/book", post(book_event))
                .with_state(Arc::new(bookings_usecase)),
        )
}

pub async fn create_event<E>(
    State(events_usecase): State<Arc<EventsUseCase<E>>>,
    auth_user: AuthUser,
    Json(create_event_model): Json<CreateEventModel>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
{
    match events_usecase
        .create_event(auth_user.user_id, create_event_model)
        .await
    {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn list_events<E>(
    State(events_usecase): State<Arc<EventsUseCase<E>>>,
    auth_user: AuthUser,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
{
    match events_usecase
        .list_events(auth_user.user_id, auth_user.role)
        .await
    {
        Ok(events) => Json(events).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn get_event<E>(
    State(events_usecase): State<Arc<EventsUseCase<E>>>,
    auth_user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
{
    match events_usecase
        .get_event(event_id, auth_user.user_id, auth_user.role)
        .await
    {
        Ok(event) => Json(event).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn update_event<E>(
    State(events_usecase): State<Arc<EventsUseCase<E>>>,
    auth_user: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(edit_event_model): Json<EditEventModel>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
{
    match events_usecase
        .update_event(event_id, auth_user.user_id, auth_user.role, edit_event_model)
        .await
    {
        Ok(event) => Json(event).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn delete_event<E>(
    State(events_usecase): State<Arc<EventsUseCase<E>>>,
    auth_user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
{
    match events_usecase
        .delete_event(event_id, auth_user.user_id, auth_user.role)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}

pub async fn book_event<E, B>(
    State(bookings_usecase): State<Arc<BookingsUseCase<E, B>>>,
    auth_user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: EventRepository + Send + Sync,
    B: BookingRepository + Send + Sync,
{
    match bookings_usecase
        .book_event(event_id, auth_user.user_id)
        .await
    {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(err) => error_responses::respond(err.status_code(), err.to_string()),
    }
}
