use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{
    EditSubscriptionEntity, InsertSubscriptionEntity, SubscriptionEntity,
};

#[async_trait]
#[automock]
pub trait SubscriptionRepository {
    async fn create(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity>;
    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SubscriptionEntity>>;
    async fn update(
        &self,
        subscription_id: Uuid,
        edit_subscription_entity: EditSubscriptionEntity,
    ) -> Result<Option<SubscriptionEntity>>;
    async fn delete(&self, subscription_id: Uuid) -> Result<bool>;
}
