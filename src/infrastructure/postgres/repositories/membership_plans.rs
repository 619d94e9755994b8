use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{delete, insert_into, prelude::*, update};
use uuid::Uuid;

use crate::{
    domain::{
        entities::membership_plans::{MembershipPlanEntity, UpsertMembershipPlanEntity},
        repositories::membership_plans::MembershipPlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::membership_plans},
};

pub struct MembershipPlanPostgres {
    db_pool: Arc<PgPool>,
}

impl MembershipPlanPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl MembershipPlanRepository for MembershipPlanPostgres {
    async fn create(
        &self,
        upsert_plan_entity: UpsertMembershipPlanEntity,
    ) -> Result<MembershipPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = insert_into(membership_plans::table)
            .values(&upsert_plan_entity)
            .returning(MembershipPlanEntity::as_returning())
            .get_result::<MembershipPlanEntity>(&mut conn)?;

        Ok(plan)
    }

    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<MembershipPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = membership_plans::table
            .find(plan_id)
            .select(MembershipPlanEntity::as_select())
            .first::<MembershipPlanEntity>(&mut conn)
            .optional()?;

        Ok(plan)
    }

    async fn list(&self) -> Result<Vec<MembershipPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = membership_plans::table
            .select(MembershipPlanEntity::as_select())
            .order(membership_plans::name.asc())
            .load::<MembershipPlanEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        plan_id: Uuid,
        upsert_plan_entity: UpsertMembershipPlanEntity,
    ) -> Result<Option<MembershipPlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = update(membership_plans::table.find(plan_id))
            .set(&upsert_plan_entity)
            .returning(MembershipPlanEntity::as_returning())
            .get_result::<MembershipPlanEntity>(&mut conn)
            .optional()?;

        Ok(plan)
    }

    async fn delete(&self, plan_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(membership_plans::table.find(plan_id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
