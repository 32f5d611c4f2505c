//! CLI library components for the service name constant generator.

pub mod logging;
pub mod pipeline;
