//! Claim service (`/api/claim`)

use tracing::instrument;

use core_kernel::{BaseResponse, ClaimId};
use domain_claims::Claim;

use crate::dto::{AcceptClaimRequest, ClaimFilter, CreateClaimRequest, RejectClaimRequest};
use crate::error::ClientError;
use crate::http::{ApiRequest, HttpTransport};

pub const BASE: [&str; 2] = ["api", "claim"];

pub const FETCH_ALL_FAILED: &str = "Failed to fetch claims";

#[derive(Debug, Clone, Copy)]
pub struct ClaimService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> ClaimService<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Absent or empty filter values are left out of the query
    pub fn list_request(filter: &ClaimFilter) -> ApiRequest {
        ApiRequest::get(&BASE)
            .segment("all")
            .query_opt("status", filter.status.as_deref())
            .query_opt(
                "insurancePlanId",
                filter.insurance_plan_id.as_ref().map(|id| id.as_str()),
            )
    }

    pub fn get_request(id: &ClaimId) -> ApiRequest {
        ApiRequest::get(&BASE).segment(id)
    }

    pub fn create_request(body: &CreateClaimRequest) -> Result<ApiRequest, ClientError> {
        ApiRequest::post(&BASE).segment("create").json(body)
    }

    pub fn accept_request(id: &ClaimId, body: &AcceptClaimRequest) -> Result<ApiRequest, ClientError> {
        ApiRequest::put(&BASE).segment("accept").segment(id).json(body)
    }

    pub fn reject_request(id: &ClaimId, body: &RejectClaimRequest) -> Result<ApiRequest, ClientError> {
        ApiRequest::put(&BASE).segment("reject").segment(id).json(body)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: &ClaimFilter) -> Result<Vec<Claim>, ClientError> {
        self.transport
            .fetch_data(&Self::list_request(filter), FETCH_ALL_FAILED)
            .await
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &ClaimId) -> Result<BaseResponse<Claim>, ClientError> {
        self.transport.fetch_envelope(&Self::get_request(id)).await
    }

    /// Files a claim against an ordered plan
    #[instrument(skip(self, body), fields(ordered_plan_id = %body.ordered_plan_id))]
    pub async fn create(&self, body: &CreateClaimRequest) -> Result<BaseResponse<Claim>, ClientError> {
        self.transport
            .fetch_envelope(&Self::create_request(body)?)
            .await
    }

    #[instrument(skip(self, body), fields(id = %id))]
    pub async fn accept(
        &self,
        id: &ClaimId,
        body: &AcceptClaimRequest,
    ) -> Result<BaseResponse<Claim>, ClientError> {
        self.transport
            .fetch_envelope(&Self::accept_request(id, body)?)
            .await
    }

    #[instrument(skip(self, body), fields(id = %id))]
    pub async fn reject(
        &self,
        id: &ClaimId,
        body: &RejectClaimRequest,
    ) -> Result<BaseResponse<Claim>, ClientError> {
        self.transport
            .fetch_envelope(&Self::reject_request(id, body)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn test_list_without_filters_has_no_query() {
        let request = ClaimService::list_request(&ClaimFilter::new());
        assert_eq!(request.path(), "/api/claim/all");
        assert!(request.query_pairs().is_empty());
    }

    #[test]
    fn test_list_with_status_only() {
        let request = ClaimService::list_request(&ClaimFilter::new().with_status("PENDING"));
        assert_eq!(request.query_string().as_deref(), Some("status=PENDING"));
    }

    #[test]
    fn test_list_with_both_filters() {
        let filter = ClaimFilter::new()
            .with_status("ACCEPTED")
            .with_insurance_plan("plan-9");
        let request = ClaimService::list_request(&filter);
        assert_eq!(
            request.query_string().as_deref(),
            Some("status=ACCEPTED&insurancePlanId=plan-9")
        );
    }

    #[test]
    fn test_reject_request_body() {
        let body = RejectClaimRequest {
            rejection_reason: "Out of coverage".to_string(),
            rejection_description: "Trip was cancelled by the traveller".to_string(),
        };
        let request = ClaimService::reject_request(&ClaimId::new("c1"), &body).unwrap();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.path(), "/api/claim/reject/c1");
        assert_eq!(request.body_as::<RejectClaimRequest>().unwrap(), Some(body));
    }
}
