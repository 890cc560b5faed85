//! Statistics service (`/api/statistics`)
//!
//! Both calls fail on a non-2xx status; the backend's own message is
//! reported when the error envelope carries one.

use tracing::instrument;

use core_kernel::{ServiceFilter, TimePeriod};

use crate::dto::{DashboardStats, Statistics};
use crate::error::ClientError;
use crate::http::{ApiRequest, HttpTransport};

pub const BASE: [&str; 2] = ["api", "statistics"];

pub const DASHBOARD_FAILED: &str = "Failed to fetch dashboard statistics";
pub const BREAKDOWN_FAILED: &str = "Failed to fetch statistics";

#[derive(Debug, Clone, Copy)]
pub struct StatisticsService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> StatisticsService<'a> {
    pub fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    pub fn dashboard_request() -> ApiRequest {
        ApiRequest::get(&BASE).segment("dashboard")
    }

    /// `ServiceFilter::All` is never sent; the parameter is left out instead
    pub fn breakdown_request(period: TimePeriod, service: ServiceFilter) -> ApiRequest {
        ApiRequest::get(&BASE)
            .query("timePeriod", period.as_str())
            .query_opt("service", service.query_value())
    }

    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardStats, ClientError> {
        self.transport
            .fetch_data_or_message(&Self::dashboard_request(), DASHBOARD_FAILED)
            .await
    }

    /// Ordered plans bought within `period`, optionally for one service
    #[instrument(skip(self), fields(period = %period, service = %service))]
    pub async fn breakdown(
        &self,
        period: TimePeriod,
        service: ServiceFilter,
    ) -> Result<Statistics, ClientError> {
        self.transport
            .fetch_data_or_message(&Self::breakdown_request(period, service), BREAKDOWN_FAILED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ServiceType;

    #[test]
    fn test_all_services_is_omitted() {
        let request = StatisticsService::breakdown_request(TimePeriod::SixMonths, ServiceFilter::All);
        assert_eq!(request.path(), "/api/statistics");
        assert_eq!(request.query_string().as_deref(), Some("timePeriod=6_MONTHS"));
        assert_eq!(request.query_value("service"), None);
    }

    #[test]
    fn test_service_filter_is_sent() {
        let request = StatisticsService::breakdown_request(
            TimePeriod::TwelveMonths,
            ServiceFilter::Only(ServiceType::Rental),
        );
        assert_eq!(
            request.query_string().as_deref(),
            Some("timePeriod=12_MONTHS&service=RENTAL")
        );
    }

    #[test]
    fn test_dashboard_path() {
        assert_eq!(
            StatisticsService::dashboard_request().path(),
            "/api/statistics/dashboard"
        );
    }
}
