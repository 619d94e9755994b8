pub mod access_scope;
pub mod billing_period;
pub mod bookings;
pub mod enums;
pub mod events;
pub mod exercises;
pub mod membership_plans;
pub mod subscriptions;
pub mod users;
pub mod workout_plans;
