//! Insurance plan schema

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{InsurancePlanId, ProviderId, ServiceType};

/// An insurance product offered by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlan {
    pub id: InsurancePlanId,
    pub provider_id: ProviderId,
    pub plan_name: String,
    /// Premium charged per order
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Maximum payout
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage: Decimal,
    pub coverage_details: String,
    /// Services the plan can be attached to
    pub applicable_service: Vec<ServiceType>,
    /// Validity of an ordered plan, counted from the order date
    pub expired_by_days: u32,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "core_kernel::temporal::flexible_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InsurancePlan {
    /// Whether the plan may be attached to a policy for `service`
    pub fn covers(&self, service: ServiceType) -> bool {
        self.applicable_service.contains(&service)
    }

    pub fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Expiry an ordered plan would get if bought at `ordered_at`
    pub fn expiry_from(&self, ordered_at: DateTime<Utc>) -> DateTime<Utc> {
        ordered_at + Duration::days(i64::from(self.expired_by_days))
    }
}
