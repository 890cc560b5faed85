//! Claims Domain
//!
//! A claim is a request for payout against an ordered plan. The backend
//! drives it from pending to either accepted or rejected:
//!
//! ```text
//! PENDING -> ACCEPTED (acceptance note)
//!         -> REJECTED (reason + description)
//! ```
//!
//! This crate holds the one authoritative claim schema. The shape embedded in
//! ordered plans is [`ClaimRecord`]; the standalone [`Claim`] adds the
//! ordered-plan and insurance-plan context around the same record.

pub mod claim;

pub use claim::{Claim, ClaimRecord, ClaimResolution, ClaimStatus};
