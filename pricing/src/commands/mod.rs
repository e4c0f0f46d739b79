//! CLI command implementations.
//!
//! These modules implement the user-facing CLI commands and legitimately
//! use stdout for output.

pub mod eligibility;
pub mod init;
pub mod quote;
pub mod tier;
