use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::membership_plans::{
    MembershipPlanEntity, UpsertMembershipPlanEntity,
};

#[async_trait]
#[automock]
pub trait MembershipPlanRepository {
    async fn create(
        &self,
        upsert_plan_entity: UpsertMembershipPlanEntity,
    ) -> Result<MembershipPlanEntity>;
    async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<MembershipPlanEntity>>;
    async fn list(&self) -> Result<Vec<MembershipPlanEntity>>;
    async fn update(
        &self,
        plan_id: Uuid,
        upsert_plan_entity: UpsertMembershipPlanEntity,
    ) -> Result<Option<MembershipPlanEntity>>;
    async fn delete(&self, plan_id: Uuid) -> Result<bool>;
}
