//! Policy schema

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{BookingId, InsurancePlanId, PolicyId, ServiceType, UserId};
use crate::ordered_plan::OrderedPlanSummary;

/// A policy bought for one booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: PolicyId,
    pub user_id: UserId,
    pub booking_id: BookingId,
    pub service: ServiceType,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub start_date: DateTime<Utc>,
    /// Backend-owned status token
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_coverage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(default)]
    pub ordered_plans: Vec<OrderedPlanSummary>,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "core_kernel::temporal::flexible_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Policy {
    /// Insurance plans bought under this policy, in order
    pub fn insurance_plan_ids(&self) -> Vec<&InsurancePlanId> {
        self.ordered_plans
            .iter()
            .map(|plan| &plan.insurance_plan_id)
            .collect()
    }

    /// Sum of the embedded ordered plans' prices
    ///
    /// Matches `total_price` unless the backend omitted the ordered plans.
    pub fn ordered_price(&self) -> Decimal {
        self.ordered_plans
            .iter()
            .map(|plan| plan.insurance_plan_price)
            .sum()
    }

    pub fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }
}
