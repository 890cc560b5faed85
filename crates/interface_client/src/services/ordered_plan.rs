//! Ordered plan service (`/api/ordered-plan`)

use tracing::instrument;

use core_kernel::{BaseResponse, OrderedPlanId, PolicyId};
use domain_policy::OrderedPlan;

use crate::error::ClientError;
use crate::http::{ApiRequest, HttpTransport};

pub const BASE: [&str; 2] = ["api", "ordered-plan"];

pub const FETCH_ALL_FAILED: &str = "Failed to fetch ordered plans";
pub const FETCH_BY_POLICY_FAILED: &str = "Failed to fetch ordered plans for policy";

#[derive(Debug, Clone, Copy)]
pub struct OrderedPlanService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> OrderedPlanService<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub fn get_request(id: &OrderedPlanId) -> ApiRequest {
        ApiRequest::get(&BASE).segment(id)
    }

    pub fn list_request() -> ApiRequest {
        ApiRequest::get(&BASE).segment("all")
    }

    pub fn list_by_policy_request(policy_id: &PolicyId) -> ApiRequest {
        ApiRequest::get(&BASE).segment("policy").segment(policy_id)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &OrderedPlanId) -> Result<BaseResponse<OrderedPlan>, ClientError> {
        self.transport.fetch_envelope(&Self::get_request(id)).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<OrderedPlan>, ClientError> {
        self.transport
            .fetch_data(&Self::list_request(), FETCH_ALL_FAILED)
            .await
    }

    /// Ordered plans bought under one policy
    #[instrument(skip(self), fields(policy_id = %policy_id))]
    pub async fn list_by_policy(&self, policy_id: &PolicyId) -> Result<Vec<OrderedPlan>, ClientError> {
        self.transport
            .fetch_data(&Self::list_by_policy_request(policy_id), FETCH_BY_POLICY_FAILED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_paths() {
        assert_eq!(OrderedPlanService::list_request().path(), "/api/ordered-plan/all");
        assert_eq!(
            OrderedPlanService::get_request(&OrderedPlanId::new("op-1")).path(),
            "/api/ordered-plan/op-1"
        );
        assert_eq!(
            OrderedPlanService::list_by_policy_request(&PolicyId::new("pol-1")).path(),
            "/api/ordered-plan/policy/pol-1"
        );
    }
}
