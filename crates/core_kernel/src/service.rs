//! Service and reporting tokens exchanged with the backend
//!
//! Travel services an insurance plan can apply to, the reporting windows the
//! statistics endpoint understands, and the service filter whose
//! `ALL_SERVICES` sentinel must never reach the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Sentinel meaning "do not filter by service"
pub const ALL_SERVICES: &str = "ALL_SERVICES";

/// Travel service an insurance plan or policy is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    Accommodation,
    Flight,
    Package,
    Rental,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Accommodation,
        ServiceType::Flight,
        ServiceType::Package,
        ServiceType::Rental,
    ];

    /// Returns the wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Accommodation => "ACCOMMODATION",
            ServiceType::Flight => "FLIGHT",
            ServiceType::Package => "PACKAGE",
            ServiceType::Rental => "RENTAL",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        ServiceType::ALL
            .into_iter()
            .find(|service| service.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| CoreError::unknown_token("service", token))
    }
}

/// Reporting window accepted by the statistics endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "3_MONTHS")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6_MONTHS")]
    SixMonths,
    #[serde(rename = "12_MONTHS")]
    TwelveMonths,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 3] = [
        TimePeriod::ThreeMonths,
        TimePeriod::SixMonths,
        TimePeriod::TwelveMonths,
    ];

    /// Returns the wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::ThreeMonths => "3_MONTHS",
            TimePeriod::SixMonths => "6_MONTHS",
            TimePeriod::TwelveMonths => "12_MONTHS",
        }
    }

    /// Length of the window in months
    pub fn months(&self) -> u32 {
        match self {
            TimePeriod::ThreeMonths => 3,
            TimePeriod::SixMonths => 6,
            TimePeriod::TwelveMonths => 12,
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        TimePeriod::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| CoreError::unknown_token("time period", token))
    }
}

/// Optional service filter for statistics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServiceFilter {
    #[default]
    All,
    Only(ServiceType),
}

impl ServiceFilter {
    /// Value of the `service` query parameter, `None` when it must be omitted
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            ServiceFilter::All => None,
            ServiceFilter::Only(service) => Some(service.as_str()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.query_value().unwrap_or(ALL_SERVICES)
    }
}

impl From<ServiceType> for ServiceFilter {
    fn from(service: ServiceType) -> Self {
        ServiceFilter::Only(service)
    }
}

impl From<Option<ServiceType>> for ServiceFilter {
    fn from(service: Option<ServiceType>) -> Self {
        service.map_or(ServiceFilter::All, ServiceFilter::Only)
    }
}

impl fmt::Display for ServiceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() || token.eq_ignore_ascii_case(ALL_SERVICES) {
            return Ok(ServiceFilter::All);
        }
        token.parse().map(ServiceFilter::Only)
    }
}

impl Serialize for ServiceFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_serializes_as_token() {
        let json = serde_json::to_string(&ServiceType::Accommodation).unwrap();
        assert_eq!(json, "\"ACCOMMODATION\"");
    }

    #[test]
    fn test_time_period_serializes_as_token() {
        let json = serde_json::to_string(&TimePeriod::TwelveMonths).unwrap();
        assert_eq!(json, "\"12_MONTHS\"");
    }

    #[test]
    fn test_sentinel_parses_to_all() {
        let filter: ServiceFilter = "ALL_SERVICES".parse().unwrap();
        assert_eq!(filter, ServiceFilter::All);
        assert_eq!(filter.query_value(), None);
    }

    #[test]
    fn test_specific_service_filter() {
        let filter: ServiceFilter = "rental".parse().unwrap();
        assert_eq!(filter, ServiceFilter::Only(ServiceType::Rental));
        assert_eq!(filter.query_value(), Some("RENTAL"));
    }

    #[test]
    fn test_unknown_period_is_rejected() {
        let err = "9_MONTHS".parse::<TimePeriod>().unwrap_err();
        assert_eq!(err, CoreError::unknown_token("time period", "9_MONTHS"));
    }
}
