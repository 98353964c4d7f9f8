//! Shared building blocks: response envelope, logging setup and metrics.

pub mod types;
pub mod utils;
pub mod metrics;
