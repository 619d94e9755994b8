use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::bookings::InsertBookingEntity,
    repositories::{bookings::BookingRepository, events::EventRepository},
    value_objects::{bookings::BookingModel, enums::booking_statuses::BookingStatus},
};

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("event not found")]
    EventNotFound,
    #[error("event is fully booked")]
    EventFull,
    #[error("user has already booked this event")]
    DuplicateBooking,
    #[error("booking not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BookingError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            BookingError::EventNotFound | BookingError::NotFound => StatusCode::NOT_FOUND,
            BookingError::EventFull => StatusCode::BAD_REQUEST,
            BookingError::DuplicateBooking => StatusCode::CONFLICT,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

pub struct BookingsUseCase<E, B>
where
    E: EventRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    event_repo: Arc<E>,
    booking_repo: Arc<B>,
}

impl<E, B> BookingsUseCase<E, B>
where
    E: EventRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(event_repo: Arc<E>, booking_repo: Arc<B>) -> Self {
        Self {
            event_repo,
            booking_repo,
        }
    }

    /// Preconditions are checked in a fixed order: the event must exist,
    /// then capacity, then the one-booking-per-event rule. The capacity
    /// check-then-insert pair is not race-protected; the unique constraint
    /// on (user_id, event_id) backs the duplicate check at the database.
    pub async fn book_event(&self, event_id: Uuid, user_id: Uuid) -> BookingResult<BookingModel> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or(BookingError::EventNotFound)?;

        if let Some(max_participants) = event.max_participants {
            let booked = self.booking_repo.count_for_event(event_id).await?;
            if booked >= max_participants as i64 {
                warn!(%event_id, %user_id, booked, max_participants, "bookings: event is full");
                return Err(BookingError::EventFull);
            }
        }

        if self
            .booking_repo
            .find_by_user_and_event(user_id, event_id)
            .await?
            .is_some()
        {
            warn!(%event_id, %user_id, "bookings: duplicate booking attempt");
            return Err(BookingError::DuplicateBooking);
        }

        let booking = self
            .booking_repo
            .create(InsertBookingEntity {
                event_id,
                user_id,
                status: BookingStatus::Pending.to_string(),
                created_at: Utc::now(),
            })
            .await?;

        info!(%event_id, %user_id, booking_id = %booking.id, "bookings: booking created");
        Ok(BookingModel::from(booking))
    }

    pub async fn confirm_booking(&self, booking_id: Uuid) -> BookingResult<BookingModel> {
        self.booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        let booking = self
            .booking_repo
            .set_status(booking_id, BookingStatus::Confirmed.to_string())
            .await?;

        info!(%booking_id, "bookings: booking confirmed");
        Ok(BookingModel::from(booking))
    }

    /// Hard delete, scoped to the booking owner. A foreign booking id is
    /// reported as not found.
    pub async fn cancel_booking(&self, booking_id: Uuid, user_id: Uuid) -> BookingResult<()> {
        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        if booking.user_id != user_id {
            warn!(%booking_id, %user_id, "bookings: cancel refused, reporting not found");
            return Err(BookingError::NotFound);
        }

        self.booking_repo.delete(booking_id).await?;
        info!(%booking_id, %user_id, "bookings: booking canceled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{bookings::BookingEntity, events::EventEntity},
        repositories::{bookings::MockBookingRepository, events::MockEventRepository},
        value_objects::enums::event_types::EventType,
    };
    use chrono::{NaiveDate, NaiveTime};
    use mockall::predicate::eq;

    fn capped_event(id: Uuid, max_participants: Option<i32>) -> EventEntity {
        EventEntity {
            id,
            name: "HIIT Circuit".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            starts_at: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            duration_minutes: 40,
            event_type: EventType::Public.to_string(),
            is_personal_training: false,
            max_participants,
            room_number: None,
            creator_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn sample_booking(id: Uuid, event_id: Uuid, user_id: Uuid, status: BookingStatus) -> BookingEntity {
        BookingEntity {
            id,
            event_id,
            user_id,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    fn expect_event(event_repo: &mut MockEventRepository, event: EventEntity) {
        let event_id = event.id;
        event_repo
            .expect_find_by_id()
            .with(eq(event_id))
            .returning(move |_| {
                let event = event.clone();
                Box::pin(async move { Ok(Some(event)) })
            });
    }

    #[tokio::test]
    async fn booking_missing_event_is_not_found() {
        let mut event_repo = MockEventRepository::new();
        event_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let booking_repo = MockBookingRepository::new();

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let result = usecase.book_event(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(BookingError::EventNotFound)));
    }

    #[tokio::test]
    async fn booking_accepted_one_below_capacity() {
        let event_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let mut event_repo = MockEventRepository::new();
        expect_event(&mut event_repo, capped_event(event_id, Some(2)));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_count_for_event()
            .with(eq(event_id))
            .returning(|_| Box::pin(async { Ok(1) }));
        booking_repo
            .expect_find_by_user_and_event()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        booking_repo.expect_create().returning(move |entity| {
            let booking = sample_booking(
                Uuid::new_v4(),
                entity.event_id,
                entity.user_id,
                BookingStatus::Pending,
            );
            Box::pin(async move { Ok(booking) })
        });

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let booking = usecase.book_event(event_id, user_id).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.event_id, event_id);
    }

    #[tokio::test]
    async fn booking_rejected_at_capacity() {
        let event_id = Uuid::new_v4();

        let mut event_repo = MockEventRepository::new();
        expect_event(&mut event_repo, capped_event(event_id, Some(2)));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_count_for_event()
            .with(eq(event_id))
            .returning(|_| Box::pin(async { Ok(2) }));

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let result = usecase.book_event(event_id, Uuid::new_v4()).await;

        assert!(matches!(result, Err(BookingError::EventFull)));
    }

    #[tokio::test]
    async fn uncapped_event_skips_capacity_check() {
        let event_id = Uuid::new_v4();

        let mut event_repo = MockEventRepository::new();
        expect_event(&mut event_repo, capped_event(event_id, None));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_user_and_event()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        booking_repo.expect_create().returning(move |entity| {
            let booking = sample_booking(
                Uuid::new_v4(),
                entity.event_id,
                entity.user_id,
                BookingStatus::Pending,
            );
            Box::pin(async move { Ok(booking) })
        });

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        assert!(usecase.book_event(event_id, Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn second_booking_for_same_pair_is_duplicate() {
        let event_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let mut event_repo = MockEventRepository::new();
        expect_event(&mut event_repo, capped_event(event_id, Some(10)));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_count_for_event()
            .returning(|_| Box::pin(async { Ok(1) }));
        let existing = sample_booking(Uuid::new_v4(), event_id, user_id, BookingStatus::Pending);
        booking_repo
            .expect_find_by_user_and_event()
            .with(eq(user_id), eq(event_id))
            .returning(move |_, _| {
                let existing = existing.clone();
                Box::pin(async move { Ok(Some(existing)) })
            });

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let result = usecase.book_event(event_id, user_id).await;

        assert!(matches!(result, Err(BookingError::DuplicateBooking)));
    }

    #[tokio::test]
    async fn confirm_flips_status() {
        let booking_id = Uuid::new_v4();
        let event_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let event_repo = MockEventRepository::new();
        let mut booking_repo = MockBookingRepository::new();
        let pending = sample_booking(booking_id, event_id, user_id, BookingStatus::Pending);
        booking_repo
            .expect_find_by_id()
            .with(eq(booking_id))
            .returning(move |_| {
                let pending = pending.clone();
                Box::pin(async move { Ok(Some(pending)) })
            });
        booking_repo
            .expect_set_status()
            .with(eq(booking_id), eq(BookingStatus::Confirmed.to_string()))
            .returning(move |_, status| {
                let confirmed = sample_booking(
                    booking_id,
                    event_id,
                    user_id,
                    BookingStatus::from_str(&status),
                );
                Box::pin(async move { Ok(confirmed) })
            });

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let booking = usecase.confirm_booking(booking_id).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn confirm_missing_booking_is_not_found() {
        let event_repo = MockEventRepository::new();
        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let result = usecase.confirm_booking(Uuid::new_v4()).await;

        assert!(matches!(result, Err(BookingError::NotFound)));
    }

    #[tokio::test]
    async fn cancel_foreign_booking_is_not_found() {
        let booking_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let requester = Uuid::new_v4();

        let event_repo = MockEventRepository::new();
        let mut booking_repo = MockBookingRepository::new();
        let booking = sample_booking(booking_id, Uuid::new_v4(), owner, BookingStatus::Confirmed);
        booking_repo
            .expect_find_by_id()
            .with(eq(booking_id))
            .returning(move |_| {
                let booking = booking.clone();
                Box::pin(async move { Ok(Some(booking)) })
            });

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        let result = usecase.cancel_booking(booking_id, requester).await;

        assert!(matches!(result, Err(BookingError::NotFound)));
    }

    #[tokio::test]
    async fn cancel_own_booking_deletes_it() {
        let booking_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let event_repo = MockEventRepository::new();
        let mut booking_repo = MockBookingRepository::new();
        let booking = sample_booking(booking_id, Uuid::new_v4(), user_id, BookingStatus::Pending);
        booking_repo
            .expect_find_by_id()
            .with(eq(booking_id))
            .returning(move |_| {
                let booking = booking.clone();
                Box::pin(async move { Ok(Some(booking)) })
            });
        booking_repo
            .expect_delete()
            .with(eq(booking_id))
            .returning(|_| Box::pin(async { Ok(()) }));

        let usecase = BookingsUseCase::new(Arc::new(event_repo), Arc::new(booking_repo));
        assert!(usecase.cancel_booking(booking_id, user_id).await.is_ok());
    }
}
