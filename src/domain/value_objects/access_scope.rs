use uuid::Uuid;

use crate::domain::{
    entities::events::EventEntity,
    value_objects::enums::{event_types::EventType, roles::UserRole},
};

/// Whether `requester` may see `event` at all.
///
/// Admins see everything. Trainers see only events they authored, public or
/// private. Members see their own events plus every public event.
pub fn can_view_event(role: UserRole, requester_id: Uuid, event: &EventEntity) -> bool {
    match role {
        UserRole::Admin => true,
        UserRole::Trainer => event.creator_id == requester_id,
        UserRole::Member => {
            event.creator_id == requester_id
                || EventType::from_str(&event.event_type) == Some(EventType::Public)
        }
    }
}

/// Whether `requester` may update or delete `event`.
///
/// Callers must report a failed check as plain not-found: existence is never
/// distinguishable from permission for event mutations.
pub fn can_mutate_event(role: UserRole, requester_id: Uuid, event: &EventEntity) -> bool {
    role == UserRole::Admin || event.creator_id == requester_id
}

/// Applies the visibility rule to an already-fetched collection.
pub fn visible_events(
    role: UserRole,
    requester_id: Uuid,
    events: Vec<EventEntity>,
) -> Vec<EventEntity> {
    events
        .into_iter()
        .filter(|event| can_view_event(role, requester_id, event))
        .collect()
}
