//! Statistics DTOs
//!
//! Read-only aggregates computed by the backend.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ServiceType;

/// Headline counts shown on the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_insurance_plans: u64,
    pub total_policies: u64,
    pub total_claims_processed: u64,
}

/// Ordered plans purchased within a reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Echo of the requested window token
    pub time_period: String,
    /// Echo of the requested service, `ALL_SERVICES` when unfiltered
    pub service: String,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "core_kernel::temporal::flexible")]
    pub end_date: DateTime<Utc>,
    pub total_ordered_plans: u64,
    #[serde(default)]
    pub breakdown_by_service: Option<BTreeMap<String, u64>>,
}

impl Statistics {
    /// Count for one service, when the backend sent a breakdown
    pub fn breakdown_for(&self, service: ServiceType) -> Option<u64> {
        self.breakdown_by_service
            .as_ref()
            .and_then(|breakdown| breakdown.get(service.as_str()).copied())
    }

    /// Sum of the breakdown, or the total when no breakdown was sent
    pub fn breakdown_total(&self) -> u64 {
        self.breakdown_by_service
            .as_ref()
            .map(|breakdown| breakdown.values().sum())
            .unwrap_or(self.total_ordered_plans)
    }
}
