//! Ordered plan schema
//!
//! An ordered plan is an insurance plan bought under a policy. It keeps a
//! denormalised copy of the plan's terms at order time, so later edits to
//! the catalogue do not change what was sold.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{InsurancePlanId, OrderedPlanId, PolicyId};
use domain_claims::{ClaimRecord, ClaimStatus};

/// The part of an ordered plan embedded in a policy
///
/// Policies carry a slimmer projection in which price and coverage may use
/// the short keys `price` and `coverage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedPlanSummary {
    pub id: OrderedPlanId,
    pub status: String,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub expired_date: DateTime<Utc>,
    pub insurance_plan_id: InsurancePlanId,
    pub insurance_plan_name: String,
    #[serde(alias = "price", with = "rust_decimal::serde::float")]
    pub insurance_plan_price: Decimal,
    #[serde(alias = "coverage", with = "rust_decimal::serde::float")]
    pub insurance_plan_coverage: Decimal,
    #[serde(default)]
    pub claims: Vec<ClaimRecord>,
}

impl OrderedPlanSummary {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expired_date <= now
    }

    /// Claims still awaiting a decision
    pub fn open_claims(&self) -> impl Iterator<Item = &ClaimRecord> {
        self.claims
            .iter()
            .filter(|claim| claim.status_kind() == ClaimStatus::Pending)
    }

    pub fn has_open_claim(&self) -> bool {
        self.open_claims().next().is_some()
    }
}

/// Full ordered plan as returned by the ordered-plan endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedPlan {
    #[serde(flatten)]
    pub summary: OrderedPlanSummary,
    pub insurance_plan_coverage_details: String,
    pub insurance_plan_expired_by_days: u32,
    pub policy_id: PolicyId,
    pub policy_status: String,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "core_kernel::temporal::flexible_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderedPlan {
    pub fn id(&self) -> &OrderedPlanId {
        &self.summary.id
    }

    pub fn claims(&self) -> &[ClaimRecord] {
        &self.summary.claims
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.summary.is_expired_at(now)
    }

    pub fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }
}

impl From<OrderedPlan> for OrderedPlanSummary {
    fn from(plan: OrderedPlan) -> Self {
        plan.summary
    }
}
