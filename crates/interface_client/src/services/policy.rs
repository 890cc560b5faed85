//! Policy service (`/api/policy`)

use tracing::instrument;

use core_kernel::{BaseResponse, PolicyId};
use domain_policy::Policy;

use crate::dto::CreatePolicyRequest;
use crate::error::ClientError;
use crate::http::{ApiRequest, HttpTransport};

pub const BASE: [&str; 2] = ["api", "policy"];

pub const FETCH_ALL_FAILED: &str = "Failed to fetch policies";

#[derive(Debug, Clone, Copy)]
pub struct PolicyService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> PolicyService<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub fn list_request() -> ApiRequest {
        ApiRequest::get(&BASE).segment("all")
    }

    pub fn get_request(id: &PolicyId) -> ApiRequest {
        ApiRequest::get(&BASE).segment(id)
    }

    pub fn create_request(body: &CreatePolicyRequest) -> Result<ApiRequest, ClientError> {
        ApiRequest::post(&BASE).segment("create").json(body)
    }

    /// Marks a policy as paid; the call carries no body
    pub fn pay_request(id: &PolicyId) -> ApiRequest {
        ApiRequest::put(&BASE).segment("pay").segment(id)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Policy>, ClientError> {
        self.transport
            .fetch_data(&Self::list_request(), FETCH_ALL_FAILED)
            .await
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &PolicyId) -> Result<BaseResponse<Policy>, ClientError> {
        self.transport.fetch_envelope(&Self::get_request(id)).await
    }

    /// Creates a policy; the backend's envelope is returned unmodified
    #[instrument(skip(self, body), fields(booking_id = %body.booking_id, service = %body.service))]
    pub async fn create(&self, body: &CreatePolicyRequest) -> Result<BaseResponse<Policy>, ClientError> {
        self.transport
            .fetch_envelope(&Self::create_request(body)?)
            .await
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn pay(&self, id: &PolicyId) -> Result<BaseResponse<Policy>, ClientError> {
        self.transport.fetch_envelope(&Self::pay_request(id)).await
    }
}
