//! Strongly-typed identifiers for backend entities
//!
//! The backend owns identifier generation and hands them out as opaque
//! strings. Newtype wrappers keep a claim id from being passed where a
//! policy id is expected, without assuming anything about the format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier handed out by the backend
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as sent on the wire
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the entity label used in messages
            pub fn label() -> &'static str {
                $label
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::InvalidIdentifier(format!(
                        "{} id must not be blank",
                        $label
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalogue
define_id!(InsurancePlanId, "insurance plan");
define_id!(ProviderId, "provider");

// Policies
define_id!(PolicyId, "policy");
define_id!(UserId, "user");
define_id!(BookingId, "booking");
define_id!(OrderedPlanId, "ordered plan");

// Claims
define_id!(ClaimId, "claim");
