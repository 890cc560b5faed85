//! Claims DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{InsurancePlanId, OrderedPlanId};
use domain_claims::ClaimStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub ordered_plan_id: OrderedPlanId,
    pub proof: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptClaimRequest {
    pub accepted_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectClaimRequest {
    pub rejection_reason: String,
    pub rejection_description: String,
}

/// Optional filters for the claim listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimFilter {
    pub status: Option<String>,
    pub insurance_plan_id: Option<InsurancePlanId>,
}

impl ClaimFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters on a raw status token; the backend owns the vocabulary
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_status_kind(self, status: ClaimStatus) -> Self {
        self.with_status(status.as_str())
    }

    pub fn with_insurance_plan(mut self, id: impl Into<InsurancePlanId>) -> Self {
        self.insurance_plan_id = Some(id.into());
        self
    }
}
