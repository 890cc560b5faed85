//! Insurance plan service (`/api/insurance`)

use tracing::instrument;

use core_kernel::{BaseResponse, InsurancePlanId};
use domain_policy::InsurancePlan;

use crate::dto::{CreateInsurancePlanRequest, UpdateInsurancePlanRequest};
use crate::error::ClientError;
use crate::http::{ApiRequest, HttpTransport};

pub const BASE: [&str; 2] = ["api", "insurance"];

pub const FETCH_ALL_FAILED: &str = "Failed to fetch insurance plans";
pub const UPDATE_FAILED: &str = "Failed to update insurance plan";
pub const DELETE_FAILED: &str = "Failed to delete insurance plan";

/// Insurance plan catalogue operations
#[derive(Debug, Clone, Copy)]
pub struct InsurancePlanService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> InsurancePlanService<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub fn list_request() -> ApiRequest {
        ApiRequest::get(&BASE).segment("all")
    }

    pub fn get_request(id: &InsurancePlanId) -> ApiRequest {
        ApiRequest::get(&BASE).segment(id)
    }

    pub fn create_request(body: &CreateInsurancePlanRequest) -> Result<ApiRequest, ClientError> {
        ApiRequest::post(&BASE).segment("create").json(body)
    }

    pub fn update_request(
        id: &InsurancePlanId,
        body: &UpdateInsurancePlanRequest,
    ) -> Result<ApiRequest, ClientError> {
        ApiRequest::put(&BASE).segment("update").segment(id).json(body)
    }

    pub fn delete_request(id: &InsurancePlanId) -> ApiRequest {
        ApiRequest::delete(&BASE).segment("delete").segment(id)
    }

    /// Lists every plan in the catalogue
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<InsurancePlan>, ClientError> {
        self.transport
            .fetch_data(&Self::list_request(), FETCH_ALL_FAILED)
            .await
    }

    /// Fetches one plan; the envelope is returned whatever the status
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &InsurancePlanId) -> Result<BaseResponse<InsurancePlan>, ClientError> {
        self.transport.fetch_envelope(&Self::get_request(id)).await
    }

    #[instrument(skip(self, body))]
    pub async fn create(
        &self,
        body: &CreateInsurancePlanRequest,
    ) -> Result<BaseResponse<InsurancePlan>, ClientError> {
        self.transport
            .fetch_envelope(&Self::create_request(body)?)
            .await
    }

    /// Applies a partial update and returns the updated plan
    #[instrument(skip(self, body), fields(id = %id))]
    pub async fn update(
        &self,
        id: &InsurancePlanId,
        body: &UpdateInsurancePlanRequest,
    ) -> Result<InsurancePlan, ClientError> {
        self.transport
            .fetch_data(&Self::update_request(id, body)?, UPDATE_FAILED)
            .await
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &InsurancePlanId) -> Result<(), ClientError> {
        self.transport
            .execute(&Self::delete_request(id), DELETE_FAILED)
            .await
    }
}
