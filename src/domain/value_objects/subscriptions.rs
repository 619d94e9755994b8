use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::{EditSubscriptionEntity, SubscriptionEntity},
    value_objects::enums::subscription_statuses::SubscriptionStatus,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubscriptionModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub membership_plan_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionEntity> for SubscriptionModel {
    fn from(entity: SubscriptionEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            membership_plan_id: entity.membership_plan_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: SubscriptionStatus::from_str(&entity.status),
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriptionModel {
    pub membership_plan_id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditSubscriptionModel {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
}

impl EditSubscriptionModel {
    pub fn to_entity(&self) -> EditSubscriptionEntity {
        EditSubscriptionEntity {
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.to_string(),
        }
    }
}
