//!
//! Entries of the aggregate findings.
//!

use serde::Serialize;

use crate::model::report::configuration::ConfigurationResult;
use crate::model::report::BenchmarkReport;

///
/// A configuration together with the report that owns it.
///
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationRef<'a> {
    /// The owning report.
    pub report: &'a BenchmarkReport,
    /// The configuration itself.
    pub configuration: &'a ConfigurationResult,
}

impl<'a> ConfigurationRef<'a> {
    ///
    /// The owning report's node label, or a fallback when absent.
    ///
    pub fn node_or(&self, fallback: &'a str) -> &'a str {
        self.report.node.as_deref().unwrap_or(fallback)
    }

    ///
    /// The owning report's accelerator model, or a fallback when absent.
    ///
    pub fn gpu_type_or(&self, fallback: &'a str) -> &'a str {
        self.report.gpu_type.as_deref().unwrap_or(fallback)
    }
}

///
/// Speedup of one accelerated configuration over the processor baseline.
///
/// A metric is `None` when the baseline throughput for it is zero; dividing
/// by it would report an infinite speedup instead of an unavailable one.
///
#[derive(Debug, Clone, Copy)]
pub struct SpeedupEntry<'a> {
    /// The accelerated configuration.
    pub subject: ConfigurationRef<'a>,
    /// Prompt-processing speedup multiplier.
    pub pp512: Option<f64>,
    /// Text-generation speedup multiplier.
    pub tg128: Option<f64>,
}

///
/// Verdict of the multi-accelerator scaling comparison.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict")]
pub enum ScalingVerdict {
    /// One of the buckets is empty; no comparison is possible.
    #[serde(rename = "insufficient-data")]
    InsufficientData,
    /// Both buckets are populated; the sign of the delta classifies the
    /// scaling as positive or negative.
    #[serde(rename = "scaling")]
    Scaling {
        /// Mean prompt-processing throughput of single-accelerator runs.
        single_mean: f64,
        /// Mean prompt-processing throughput of multi-accelerator runs.
        multi_mean: f64,
        /// Signed percentage delta of multi vs. single.
        delta_percent: f64,
    },
}

impl ScalingVerdict {
    ///
    /// Whether the verdict reports positive scaling.
    ///
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Self::Scaling { delta_percent, .. } if *delta_percent >= 0.0
        )
    }
}
