use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::subscriptions::InsertSubscriptionEntity,
    repositories::{
        membership_plans::MembershipPlanRepository, subscriptions::SubscriptionRepository,
    },
    value_objects::{
        billing_period,
        enums::subscription_statuses::SubscriptionStatus,
        subscriptions::{CreateSubscriptionModel, EditSubscriptionModel, SubscriptionModel},
    },
};

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("membership plan not found")]
    PlanNotFound,
    #[error("subscription not found")]
    NotFound,
    #[error("invalid date or duration: {0}")]
    InvalidPeriod(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionError::PlanNotFound | SubscriptionError::NotFound => StatusCode::NOT_FOUND,
            SubscriptionError::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            SubscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type SubscriptionResult<T> = Result<T, SubscriptionError>;

pub struct SubscriptionsUseCase<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: MembershipPlanRepository + Send + Sync + 'static,
{
    subscription_repo: Arc<S>,
    plan_repo: Arc<P>,
}

impl<S, P> SubscriptionsUseCase<S, P>
where
    S: SubscriptionRepository + Send + Sync + 'static,
    P: MembershipPlanRepository + Send + Sync + 'static,
{
    pub fn new(subscription_repo: Arc<S>, plan_repo: Arc<P>) -> Self {
        Self {
            subscription_repo,
            plan_repo,
        }
    }

    /// The end date is always derived from the plan duration, never taken
    /// from the caller. New subscriptions start out active.
    pub async fn create_subscription(
        &self,
        model: CreateSubscriptionModel,
    ) -> SubscriptionResult<SubscriptionModel> {
        let plan = self
            .plan_repo
            .find_by_id(model.membership_plan_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    plan_id = %model.membership_plan_id,
                    "subscriptions: membership plan not found"
                );
                SubscriptionError::PlanNotFound
            })?;

        let end_date = billing_period::period_end(model.start_date, plan.duration_months)
            .map_err(|err| {
                warn!(
                    plan_id = %plan.id,
                    start_date = %model.start_date,
                    duration_months = plan.duration_months,
                    "subscriptions: rejected period computation"
                );
                SubscriptionError::InvalidPeriod(err.to_string())
            })?;

        let subscription = self
            .subscription_repo
            .create(InsertSubscriptionEntity {
                user_id: model.user_id,
                membership_plan_id: plan.id,
                start_date: model.start_date,
                end_date,
                status: SubscriptionStatus::Active.to_string(),
                created_at: Utc::now(),
            })
            .await
            .map_err(|err| {
                error!(
                    user_id = %model.user_id,
                    plan_id = %plan.id,
                    db_error = ?err,
                    "subscriptions: failed to persist subscription"
                );
                SubscriptionError::Internal(err)
            })?;

        info!(
            subscription_id = %subscription.id,
            user_id = %subscription.user_id,
            plan_id = %plan.id,
            %end_date,
            "subscriptions: subscription created"
        );
        Ok(SubscriptionModel::from(subscription))
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> SubscriptionResult<Vec<SubscriptionModel>> {
        let subscriptions = self.subscription_repo.list_for_user(user_id).await?;
        Ok(subscriptions
            .into_iter()
            .map(SubscriptionModel::from)
            .collect())
    }

    pub async fn update_subscription(
        &self,
        subscription_id: Uuid,
        model: EditSubscriptionModel,
    ) -> SubscriptionResult<SubscriptionModel> {
        let updated = self
            .subscription_repo
            .update(subscription_id, model.to_entity())
            .await?
            .ok_or(SubscriptionError::NotFound)?;

        info!(%subscription_id, "subscriptions: subscription updated");
        Ok(SubscriptionModel::from(updated))
    }

    pub async fn cancel_subscription(&self, subscription_id: Uuid) -> SubscriptionResult<()> {
        if !self.subscription_repo.delete(subscription_id).await? {
            return Err(SubscriptionError::NotFound);
        }
        info!(%subscription_id, "subscriptions: subscription deleted");
        Ok(())
    }

    pub async fn membership_status(
        &self,
        subscription_id: Uuid,
    ) -> SubscriptionResult<SubscriptionStatus> {
        let subscription = self
            .subscription_repo
            .find_by_id(subscription_id)
            .await?
            .ok_or(SubscriptionError::NotFound)?;

        Ok(SubscriptionStatus::from_str(&subscription.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{membership_plans::MembershipPlanEntity, subscriptions::SubscriptionEntity},
        repositories::{
            membership_plans::MockMembershipPlanRepository,
            subscriptions::MockSubscriptionRepository,
        },
    };
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn monthly_plan(id: Uuid, duration_months: i32) -> MembershipPlanEntity {
        MembershipPlanEntity {
            id,
            name: "Standard".to_string(),
            description: None,
            price: 29.9,
            duration_months,
            promotion: None,
        }
    }

    fn expect_plan(plan_repo: &mut MockMembershipPlanRepository, plan: MembershipPlanEntity) {
        let plan_id = plan.id;
        plan_repo
            .expect_find_by_id()
            .with(eq(plan_id))
            .returning(move |_| {
                let plan = plan.clone();
                Box::pin(async move { Ok(Some(plan)) })
            });
    }

    fn echo_create(subscription_repo: &mut MockSubscriptionRepository) {
        subscription_repo.expect_create().returning(|entity| {
            let subscription = SubscriptionEntity {
                id: Uuid::new_v4(),
                user_id: entity.user_id,
                membership_plan_id: entity.membership_plan_id,
                start_date: entity.start_date,
                end_date: entity.end_date,
                status: entity.status,
                created_at: entity.created_at,
            };
            Box::pin(async move { Ok(subscription) })
        });
    }

    #[tokio::test]
    async fn one_month_plan_ends_on_last_day_of_start_month() {
        let plan_id = Uuid::new_v4();
        let mut plan_repo = MockMembershipPlanRepository::new();
        expect_plan(&mut plan_repo, monthly_plan(plan_id, 1));
        let mut subscription_repo = MockSubscriptionRepository::new();
        echo_create(&mut subscription_repo);

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let subscription = usecase
            .create_subscription(CreateSubscriptionModel {
                membership_plan_id: plan_id,
                user_id: Uuid::new_v4(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(
            subscription.end_date,
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert_eq!(subscription.status, SubscriptionStatus::Active);
    }

    #[tokio::test]
    async fn two_month_plan_lands_on_leap_day() {
        let plan_id = Uuid::new_v4();
        let mut plan_repo = MockMembershipPlanRepository::new();
        expect_plan(&mut plan_repo, monthly_plan(plan_id, 2));
        let mut subscription_repo = MockSubscriptionRepository::new();
        echo_create(&mut subscription_repo);

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let subscription = usecase
            .create_subscription(CreateSubscriptionModel {
                membership_plan_id: plan_id,
                user_id: Uuid::new_v4(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(
            subscription.end_date,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[tokio::test]
    async fn missing_plan_is_plan_not_found() {
        let mut plan_repo = MockMembershipPlanRepository::new();
        plan_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let subscription_repo = MockSubscriptionRepository::new();

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let result = usecase
            .create_subscription(CreateSubscriptionModel {
                membership_plan_id: Uuid::new_v4(),
                user_id: Uuid::new_v4(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            })
            .await;

        assert!(matches!(result, Err(SubscriptionError::PlanNotFound)));
    }

    #[tokio::test]
    async fn zero_duration_plan_fails_validation_before_persistence() {
        let plan_id = Uuid::new_v4();
        let mut plan_repo = MockMembershipPlanRepository::new();
        expect_plan(&mut plan_repo, monthly_plan(plan_id, 0));
        // No create expectation: the insert must never be reached.
        let subscription_repo = MockSubscriptionRepository::new();

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let result = usecase
            .create_subscription(CreateSubscriptionModel {
                membership_plan_id: plan_id,
                user_id: Uuid::new_v4(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            })
            .await;

        assert!(matches!(result, Err(SubscriptionError::InvalidPeriod(_))));
    }

    #[tokio::test]
    async fn status_of_missing_subscription_is_not_found() {
        let plan_repo = MockMembershipPlanRepository::new();
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = SubscriptionsUseCase::new(Arc::new(subscription_repo), Arc::new(plan_repo));
        let result = usecase.membership_status(Uuid::new_v4()).await;

        assert!(matches!(result, Err(SubscriptionError::NotFound)));
    }
}
