//! Policy DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{BookingId, InsurancePlanId, ServiceType, UserId};

/// Creates a policy from a set of insurance plans for one booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePolicyRequest {
    pub user_id: UserId,
    pub booking_id: BookingId,
    pub service: ServiceType,
    pub insurance_plan_ids: Vec<InsurancePlanId>,
}
