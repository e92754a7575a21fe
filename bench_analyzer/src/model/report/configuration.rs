//!
//! The measured result of one benchmark configuration.
//!

use serde::Serialize;

use crate::model::report::name::ConfigurationName;

///
/// The measured result of one benchmark configuration.
///
/// Only exists if at least one of the two metrics had a sample; a metric
/// without samples is reported as `0.0`.
///
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationResult {
    /// Categorical configuration label.
    pub name: ConfigurationName,
    /// Whether the run executed on the processor only.
    pub is_cpu_only: bool,
    /// Ordinal of the source section header, used for stable display ordering.
    pub test_index: i64,
    /// Average prompt-processing throughput in tokens per second.
    pub pp512: f64,
    /// Average text-generation throughput in tokens per second.
    pub tg128: f64,
}
