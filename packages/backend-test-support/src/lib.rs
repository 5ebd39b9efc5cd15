//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one logging
//! initializer and Problem Details assertions that don't depend on
//! backend types.

pub mod logging;
pub mod problem_details;
