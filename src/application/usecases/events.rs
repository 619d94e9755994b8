use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::events::EventRepository,
    value_objects::{
        access_scope,
        enums::roles::UserRole,
        events::{CreateEventModel, EditEventModel, EventModel},
    },
};

#[derive(Debug, Error)]
pub enum EventError {
    /// Covers both a missing event and a forbidden one: mutation callers
    /// must not be able to probe for existence.
    #[error("event not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl EventError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            EventError::NotFound => StatusCode::NOT_FOUND,
            EventError::Validation(_) => StatusCode::BAD_REQUEST,
            EventError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type EventResult<T> = Result<T, EventError>;

const MIN_DURATION_MINUTES: i32 = 15;

pub struct EventsUseCase<E>
where
    E: EventRepository + Send + Sync + 'static,
{
    event_repo: Arc<E>,
}

impl<E> EventsUseCase<E>
where
    E: EventRepository + Send + Sync + 'static,
{
    pub fn new(event_repo: Arc<E>) -> Self {
        Self { event_repo }
    }

    fn validate(duration_minutes: i32, max_participants: Option<i32>) -> EventResult<()> {
        if duration_minutes <= MIN_DURATION_MINUTES {
            return Err(EventError::Validation(format!(
                "event duration must be longer than {} minutes",
                MIN_DURATION_MINUTES
            )));
        }
        if let Some(capacity) = max_participants {
            if capacity <= 0 {
                return Err(EventError::Validation(
                    "max_participants must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub async fn create_event(
        &self,
        creator_id: Uuid,
        model: CreateEventModel,
    ) -> EventResult<EventModel> {
        Self::validate(model.duration_minutes, model.max_participants)?;

        let event = self.event_repo.create(model.to_entity(creator_id)).await?;
        info!(%creator_id, event_id = %event.id, "events: event created");
        Ok(EventModel::from(event))
    }

    pub async fn list_events(
        &self,
        requester_id: Uuid,
        role: UserRole,
    ) -> EventResult<Vec<EventModel>> {
        let events = self.event_repo.list_all().await?;
        let visible = access_scope::visible_events(role, requester_id, events);
        info!(%requester_id, %role, event_count = visible.len(), "events: listed visible events");
        Ok(visible.into_iter().map(EventModel::from).collect())
    }

    pub async fn get_event(
        &self,
        event_id: Uuid,
        requester_id: Uuid,
        role: UserRole,
    ) -> EventResult<EventModel> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound)?;

        if !access_scope::can_view_event(role, requester_id, &event) {
            warn!(%event_id, %requester_id, %role, "events: event hidden from requester");
            return Err(EventError::NotFound);
        }

        Ok(EventModel::from(event))
    }

    pub async fn update_event(
        &self,
        event_id: Uuid,
        requester_id: Uuid,
        role: UserRole,
        model: EditEventModel,
    ) -> EventResult<EventModel> {
        Self::validate(model.duration_minutes, model.max_participants)?;

        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound)?;

        if !access_scope::can_mutate_event(role, requester_id, &event) {
            warn!(%event_id, %requester_id, "events: update refused, reporting not found");
            return Err(EventError::NotFound);
        }

        let updated = self.event_repo.update(event_id, model.to_entity()).await?;
        info!(%event_id, %requester_id, "events: event updated");
        Ok(EventModel::from(updated))
    }

    pub async fn delete_event(
        &self,
        event_id: Uuid,
        requester_id: Uuid,
        role: UserRole,
    ) -> EventResult<()> {
        let event = self
            .event_repo
            .find_by_id(event_id)
            .await?
            .ok_or(EventError::NotFound)?;

        if !access_scope::can_mutate_event(role, requester_id, &event) {
            warn!(%event_id, %requester_id, "events: delete refused, reporting not found");
            return Err(EventError::NotFound);
        }

        self.event_repo.delete(event_id).await?;
        info!(%event_id, %requester_id, "events: event deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::events::EventEntity,
        repositories::events::MockEventRepository,
        value_objects::enums::event_types::EventType,
    };
    use chrono::{NaiveDate, NaiveTime, Utc};
    use mockall::predicate::eq;

    fn sample_event(id: Uuid, creator_id: Uuid, event_type: EventType) -> EventEntity {
        EventEntity {
            id,
            name: "Spin Class".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            starts_at: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
            duration_minutes: 45,
            event_type: event_type.to_string(),
            is_personal_training: false,
            max_participants: Some(20),
            room_number: Some("B2".to_string()),
            creator_id,
            created_at: Utc::now(),
        }
    }

    fn edit_model() -> EditEventModel {
        EditEventModel {
            name: "Spin Class".to_string(),
            description: Some("updated".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(),
            starts_at: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            duration_minutes: 45,
            event_type: EventType::Public,
            max_participants: Some(20),
            room_number: None,
        }
    }

    #[tokio::test]
    async fn member_listing_returns_own_and_public_events() {
        let member_id = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let own_private = sample_event(Uuid::new_v4(), member_id, EventType::Private);
        let foreign_public = sample_event(Uuid::new_v4(), stranger, EventType::Public);
        let foreign_private = sample_event(Uuid::new_v4(), stranger, EventType::Private);

        let mut event_repo = MockEventRepository::new();
        let events = vec![own_private.clone(), foreign_public.clone(), foreign_private];
        event_repo.expect_list_all().returning(move || {
            let events = events.clone();
            Box::pin(async move { Ok(events) })
        });

        let usecase = EventsUseCase::new(Arc::new(event_repo));
        let visible = usecase
            .list_events(member_id, UserRole::Member)
            .await
            .unwrap();

        let ids: Vec<Uuid> = visible.iter().map(|event| event.id).collect();
        assert_eq!(ids, vec![own_private.id, foreign_public.id]);
    }

    #[tokio::test]
    async fn trainer_listing_drops_foreign_public_events() {
        let trainer_id = Uuid::new_v4();
        let own = sample_event(Uuid::new_v4(), trainer_id, EventType::Public);
        let foreign = sample_event(Uuid::new_v4(), Uuid::new_v4(), EventType::Public);

        let mut event_repo = MockEventRepository::new();
        let events = vec![own.clone(), foreign];
        event_repo.expect_list_all().returning(move || {
            let events = events.clone();
            Box::pin(async move { Ok(events) })
        });

        let usecase = EventsUseCase::new(Arc::new(event_repo));
        let visible = usecase
            .list_events(trainer_id, UserRole::Trainer)
            .await
            .unwrap();

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, own.id);
    }

    #[tokio::test]
    async fn get_foreign_private_event_reports_not_found() {
        let member_id = Uuid::new_v4();
        let event = sample_event(Uuid::new_v4(), Uuid::new_v4(), EventType::Private);
        let event_id = event.id;

        let mut event_repo = MockEventRepository::new();
        event_repo
            .expect_find_by_id()
            .with(eq(event_id))
            .returning(move |_| {
                let event = event.clone();
                Box::pin(async move { Ok(Some(event)) })
            });

        let usecase = EventsUseCase::new(Arc::new(event_repo));
        let result = usecase.get_event(event_id, member_id, UserRole::Member).await;

        assert!(matches!(result, Err(EventError::NotFound)));
    }

    #[tokio::test]
    async fn admin_updates_any_event() {
        let admin_id = Uuid::new_v4();
        let event = sample_event(Uuid::new_v4(), Uuid::new_v4(), EventType::Private);
        let event_id = event.id;

        let mut event_repo = MockEventRepository::new();
        let found = event.clone();
        event_repo
            .expect_find_by_id()
            .with(eq(event_id))
            .returning(move |_| {
                let event = found.clone();
                Box::pin(async move { Ok(Some(event)) })
            });
        event_repo
            .expect_update()
            .returning(move |_, _| {
                let event = event.clone();
                Box::pin(async move { Ok(event) })
            });

        let usecase = EventsUseCase::new(Arc::new(event_repo));
        let result = usecase
            .update_event(event_id, admin_id, UserRole::Admin, edit_model())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_owner_delete_reports_not_found() {
        let member_id = Uuid::new_v4();
        let event = sample_event(Uuid::new_v4(), Uuid::new_v4(), EventType::Public);
        let event_id = event.id;

        let mut event_repo = MockEventRepository::new();
        event_repo
            .expect_find_by_id()
            .with(eq(event_id))
            .returning(move |_| {
                let event = event.clone();
                Box::pin(async move { Ok(Some(event)) })
            });

        let usecase = EventsUseCase::new(Arc::new(event_repo));
        let result = usecase
            .delete_event(event_id, member_id, UserRole::Member)
            .await;

        assert!(matches!(result, Err(EventError::NotFound)));
    }

    #[tokio::test]
    async fn rejects_too_short_duration_before_touching_repository() {
        let event_repo = MockEventRepository::new();
        let usecase = EventsUseCase::new(Arc::new(event_repo));

        let model = CreateEventModel {
            name: "Express Stretch".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            starts_at: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            duration_minutes: 15,
            event_type: EventType::Public,
            is_personal_training: false,
            max_participants: None,
            room_number: None,
        };

        let result = usecase.create_event(Uuid::new_v4(), model).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_non_positive_capacity() {
        let event_repo = MockEventRepository::new();
        let usecase = EventsUseCase::new(Arc::new(event_repo));

        let model = CreateEventModel {
            name: "Bootcamp".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            starts_at: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            duration_minutes: 60,
            event_type: EventType::Public,
            is_personal_training: false,
            max_participants: Some(0),
            room_number: None,
        };

        let result = usecase.create_event(Uuid::new_v4(), model).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }
}
