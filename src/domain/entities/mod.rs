pub mod bookings;
pub mod events;
pub mod exercises;
pub mod membership_plans;
pub mod subscriptions;
pub mod users;
pub mod workout_plans;
