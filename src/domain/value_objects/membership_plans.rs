use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::membership_plans::{
    MembershipPlanEntity, UpsertMembershipPlanEntity,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MembershipPlanModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_months: i32,
    pub promotion: Option<String>,
}

impl From<MembershipPlanEntity> for MembershipPlanModel {
    fn from(entity: MembershipPlanEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            duration_months: entity.duration_months,
            promotion: entity.promotion,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertMembershipPlanModel {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_months: i32,
    pub promotion: Option<String>,
}

impl UpsertMembershipPlanModel {
    pub fn to_entity(&self) -> UpsertMembershipPlanEntity {
        UpsertMembershipPlanEntity {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            duration_months: self.duration_months,
            promotion: self.promotion.clone(),
        }
    }
}
