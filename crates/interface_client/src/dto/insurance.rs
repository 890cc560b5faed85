//! Insurance plan DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ProviderId, ServiceType};
use domain_policy::InsurancePlan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInsurancePlanRequest {
    pub provider_id: ProviderId,
    pub plan_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage: Decimal,
    pub coverage_details: String,
    pub applicable_service: Vec<ServiceType>,
    pub expired_by_days: u32,
}

/// Partial update: only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInsurancePlanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub coverage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable_service: Option<Vec<ServiceType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_by_days: Option<u32>,
}

impl UpdateInsurancePlanRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan_name(mut self, plan_name: impl Into<String>) -> Self {
        self.plan_name = Some(plan_name.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn coverage(mut self, coverage: Decimal) -> Self {
        self.coverage = Some(coverage);
        self
    }

    pub fn coverage_details(mut self, details: impl Into<String>) -> Self {
        self.coverage_details = Some(details.into());
        self
    }

    pub fn applicable_service(mut self, services: Vec<ServiceType>) -> Self {
        self.applicable_service = Some(services);
        self
    }

    pub fn expired_by_days(mut self, days: u32) -> Self {
        self.expired_by_days = Some(days);
        self
    }

    /// True when no field would be sent
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Pre-fills every mutable field from an existing plan, as an edit form does
impl From<&InsurancePlan> for UpdateInsurancePlanRequest {
    fn from(plan: &InsurancePlan) -> Self {
        Self {
            plan_name: Some(plan.plan_name.clone()),
            price: Some(plan.price),
            coverage: Some(plan.coverage),
            coverage_details: Some(plan.coverage_details.clone()),
            applicable_service: Some(plan.applicable_service.clone()),
            expired_by_days: Some(plan.expired_by_days),
        }
    }
}
