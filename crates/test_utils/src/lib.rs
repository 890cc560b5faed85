//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance client test suite.
//!
//! # Modules
//!
//! - `fixtures`: Backend JSON payloads and envelope helpers
//! - `backend`: A stub backend built on wiremock, with a client pointed at it
//! - `assertions`: Assertions over the requests the stub backend received

pub mod fixtures;
pub mod backend;
pub mod assertions;

pub use fixtures::*;
pub use backend::*;
pub use assertions::*;
