use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    repositories::membership_plans::MembershipPlanRepository,
    value_objects::membership_plans::{MembershipPlanModel, UpsertMembershipPlanModel},
};

#[derive(Debug, Error)]
pub enum MembershipPlanError {
    #[error("membership plan not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl MembershipPlanError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            MembershipPlanError::NotFound => StatusCode::NOT_FOUND,
            MembershipPlanError::Validation(_) => StatusCode::BAD_REQUEST,
            MembershipPlanError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type MembershipPlanResult<T> = Result<T, MembershipPlanError>;

pub struct MembershipPlansUseCase<P>
where
    P: MembershipPlanRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
}

impl<P> MembershipPlansUseCase<P>
where
    P: MembershipPlanRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>) -> Self {
        Self { plan_repo }
    }

    fn validate(model: &UpsertMembershipPlanModel) -> MembershipPlanResult<()> {
        if model.duration_months < 1 {
            return Err(MembershipPlanError::Validation(
                "duration_months must be at least 1".to_string(),
            ));
        }
        if model.price < 0.0 {
            return Err(MembershipPlanError::Validation(
                "price must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create_plan(
        &self,
        model: UpsertMembershipPlanModel,
    ) -> MembershipPlanResult<MembershipPlanModel> {
        Self::validate(&model)?;
        let plan = self.plan_repo.create(model.to_entity()).await?;
        info!(plan_id = %plan.id, "membership_plans: plan created");
        Ok(MembershipPlanModel::from(plan))
    }

    pub async fn list_plans(&self) -> MembershipPlanResult<Vec<MembershipPlanModel>> {
        let plans = self.plan_repo.list().await?;
        Ok(plans.into_iter().map(MembershipPlanModel::from).collect())
    }

    pub async fn get_plan(&self, plan_id: Uuid) -> MembershipPlanResult<MembershipPlanModel> {
        let plan = self
            .plan_repo
            .find_by_id(plan_id)
            .await?
            .ok_or(MembershipPlanError::NotFound)?;
        Ok(MembershipPlanModel::from(plan))
    }

    pub async fn update_plan(
        &self,
        plan_id: Uuid,
        model: UpsertMembershipPlanModel,
    ) -> MembershipPlanResult<MembershipPlanModel> {
        Self::validate(&model)?;
        let plan = self
            .plan_repo
            .update(plan_id, model.to_entity())
            .await?
            .ok_or(MembershipPlanError::NotFound)?;
        info!(%plan_id, "membership_plans: plan updated");
        Ok(MembershipPlanModel::from(plan))
    }

    pub async fn delete_plan(&self, plan_id: Uuid) -> MembershipPlanResult<()> {
        if !self.plan_repo.delete(plan_id).await? {
            return Err(MembershipPlanError::NotFound);
        }
        info!(%plan_id, "membership_plans: plan deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::membership_plans::MockMembershipPlanRepository;

    fn model(duration_months: i32, price: f64) -> UpsertMembershipPlanModel {
        UpsertMembershipPlanModel {
            name: "Annual".to_string(),
            description: None,
            price,
            duration_months,
            promotion: None,
        }
    }

    #[tokio::test]
    async fn zero_month_plan_is_rejected() {
        let plan_repo = MockMembershipPlanRepository::new();
        let usecase = MembershipPlansUseCase::new(Arc::new(plan_repo));

        let result = usecase.create_plan(model(0, 19.9)).await;
        assert!(matches!(result, Err(MembershipPlanError::Validation(_))));
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let plan_repo = MockMembershipPlanRepository::new();
        let usecase = MembershipPlansUseCase::new(Arc::new(plan_repo));

        let result = usecase.create_plan(model(12, -1.0)).await;
        assert!(matches!(result, Err(MembershipPlanError::Validation(_))));
    }

    #[tokio::test]
    async fn deleting_missing_plan_is_not_found() {
        let mut plan_repo = MockMembershipPlanRepository::new();
        plan_repo
            .expect_delete()
            .returning(|_| Box::pin(async { Ok(false) }));

        let usecase = MembershipPlansUseCase::new(Arc::new(plan_repo));
        let result = usecase.delete_plan(Uuid::new_v4()).await;

        assert!(matches!(result, Err(MembershipPlanError::NotFound)));
    }
}
