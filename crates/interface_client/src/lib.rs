//! HTTP Client Layer
//!
//! Typed client for the insurance management backend.
//!
//! # Architecture
//!
//! - **Services**: One module per backend resource, each bound to one base path
//! - **DTOs**: Request bodies and read-only statistics shapes
//! - **Transport**: Request construction and the response-handling patterns
//! - **Routes / Views**: The client's route table and the fetches behind each view
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_client::{ClientConfig, InsuranceClient, dto::ClaimFilter};
//!
//! let client = InsuranceClient::new(ClientConfig::from_env()?)?;
//! let pending = client.claims().list(&ClaimFilter::new().with_status("PENDING")).await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod dto;
pub mod services;
pub mod routes;
pub mod views;

use std::sync::Arc;

use tracing::info;

pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, ClientResult};
pub use crate::http::{ApiRequest, HttpTransport};
pub use crate::routes::Route;
pub use crate::services::{
    ClaimService, InsurancePlanService, OrderedPlanService, PolicyService, StatisticsService,
};
pub use crate::views::{load_view, ViewData};

#[derive(Debug)]
struct ClientInner {
    config: ClientConfig,
    transport: HttpTransport,
}

/// Entry point to every backend resource
///
/// Cloning is cheap; clones share the same connection pool and configuration.
#[derive(Debug, Clone)]
pub struct InsuranceClient {
    inner: Arc<ClientInner>,
}

impl InsuranceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        info!(base_url = %transport.base_url(), "Insurance client configured");

        Ok(Self {
            inner: Arc::new(ClientInner { config, transport }),
        })
    }

    /// Builds a client from `INSURANCE_*` environment variables
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.inner.transport
    }

    pub fn insurance_plans(&self) -> InsurancePlanService<'_> {
        InsurancePlanService::new(&self.inner.transport)
    }

    pub fn policies(&self) -> PolicyService<'_> {
        PolicyService::new(&self.inner.transport)
    }

    pub fn ordered_plans(&self) -> OrderedPlanService<'_> {
        OrderedPlanService::new(&self.inner.transport)
    }

    pub fn claims(&self) -> ClaimService<'_> {
        ClaimService::new(&self.inner.transport)
    }

    pub fn statistics(&self) -> StatisticsService<'_> {
        StatisticsService::new(&self.inner.transport)
    }
}
