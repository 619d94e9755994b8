use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::membership_plans;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = membership_plans)]
pub struct MembershipPlanEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_months: i32,
    pub promotion: Option<String>,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = membership_plans)]
pub struct UpsertMembershipPlanEntity {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub duration_months: i32,
    pub promotion: Option<String>,
}
