use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::subscriptions::{
            EditSubscriptionEntity, InsertSubscriptionEntity, SubscriptionEntity,
        },
        repositories::subscriptions::SubscriptionRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::subscriptions},
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPool>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn create(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let subscription = insert_into(subscriptions::table)
            .values(&insert_subscription_entity)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        Ok(subscription)
    }

    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let subscription = subscriptions::table
            .find(subscription_id)
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(subscription)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .select(SubscriptionEntity::as_select())
            .order(subscriptions::start_date.desc())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        subscription_id: Uuid,
        edit_subscription_entity: EditSubscriptionEntity,
    ) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let subscription = update(subscriptions::table.find(subscription_id))
            .set(&edit_subscription_entity)
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(subscription)
    }

    async fn delete(&self, subscription_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(subscriptions::table.find(subscription_id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
