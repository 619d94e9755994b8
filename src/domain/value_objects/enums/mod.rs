pub mod booking_statuses;
pub mod event_types;
pub mod roles;
pub mod subscription_statuses;
