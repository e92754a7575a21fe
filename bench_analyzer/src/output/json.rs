//!
//! The machine-readable rendering of the aggregate findings.
//!

use std::path::Path;

use serde::Serialize;

use crate::analysis::findings::ConfigurationRef;
use crate::analysis::findings::ScalingVerdict;
use crate::analysis::findings::SpeedupEntry;
use crate::analysis::AggregateFindings;
use crate::model::report::name::ConfigurationName;

///
/// The machine-readable rendering of the aggregate findings.
///
#[derive(Debug)]
pub struct Json {
    /// The JSON file contents.
    pub content: String,
}

impl Json {
    ///
    /// Writes the findings to a file.
    ///
    pub fn write_to_file(self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content)
            .map_err(|error| anyhow::anyhow!("Findings file {path:?} writing: {error}"))?;
        Ok(())
    }
}

impl TryFrom<&AggregateFindings<'_>> for Json {
    type Error = anyhow::Error;

    fn try_from(findings: &AggregateFindings<'_>) -> Result<Self, Self::Error> {
        let summary = Summary::from(findings);
        let content = serde_json::to_string_pretty(&summary)
            .map_err(|error| anyhow::anyhow!("Findings serializing: {error}"))?;
        Ok(Self { content })
    }
}

///
/// Serializable view of one configuration and its owning report.
///
#[derive(Debug, Serialize)]
struct ConfigurationSummary<'a> {
    /// The owning report's node label.
    node: Option<&'a str>,
    /// The owning report's accelerator model.
    gpu_type: Option<&'a str>,
    /// The configuration label.
    name: ConfigurationName,
    /// Whether the run executed on the processor only.
    is_cpu_only: bool,
    /// Average prompt-processing throughput.
    pp512: f64,
    /// Average text-generation throughput.
    tg128: f64,
}

impl<'a> From<ConfigurationRef<'a>> for ConfigurationSummary<'a> {
    fn from(reference: ConfigurationRef<'a>) -> Self {
        Self {
            node: reference.report.node.as_deref(),
            gpu_type: reference.report.gpu_type.as_deref(),
            name: reference.configuration.name,
            is_cpu_only: reference.configuration.is_cpu_only,
            pp512: reference.configuration.pp512,
            tg128: reference.configuration.tg128,
        }
    }
}

///
/// Serializable view of one speedup entry.
///
#[derive(Debug, Serialize)]
struct SpeedupSummary<'a> {
    /// The owning report's node label.
    node: Option<&'a str>,
    /// The owning report's accelerator model.
    gpu_type: Option<&'a str>,
    /// The configuration label.
    name: ConfigurationName,
    /// Prompt-processing speedup multiplier, absent for a zero baseline.
    pp512: Option<f64>,
    /// Text-generation speedup multiplier, absent for a zero baseline.
    tg128: Option<f64>,
}

impl<'a> From<&SpeedupEntry<'a>> for SpeedupSummary<'a> {
    fn from(entry: &SpeedupEntry<'a>) -> Self {
        Self {
            node: entry.subject.report.node.as_deref(),
            gpu_type: entry.subject.report.gpu_type.as_deref(),
            name: entry.subject.configuration.name,
            pp512: entry.pp512,
            tg128: entry.tg128,
        }
    }
}

///
/// Serializable view of the whole findings value.
///
#[derive(Debug, Serialize)]
struct Summary<'a> {
    /// The processor baseline, if any.
    baseline: Option<ConfigurationSummary<'a>>,
    /// Speedups of accelerated configurations over the baseline.
    speedups: Vec<SpeedupSummary<'a>>,
    /// The multi-accelerator scaling verdict.
    scaling: ScalingVerdict,
    /// Mean prompt-processing throughput per accelerator model.
    hardware_ranking: &'a [(String, f64)],
    /// The configuration maximizing prompt-processing throughput.
    best_by_pp512: Option<ConfigurationSummary<'a>>,
    /// The configuration maximizing text-generation throughput.
    best_by_tg128: Option<ConfigurationSummary<'a>>,
}

impl<'a> From<&'a AggregateFindings<'a>> for Summary<'a> {
    fn from(findings: &'a AggregateFindings<'a>) -> Self {
        Self {
            baseline: findings.baseline.map(ConfigurationSummary::from),
            speedups: findings
                .speedups
                .iter()
                .map(SpeedupSummary::from)
                .collect(),
            scaling: findings.scaling,
            hardware_ranking: findings.hardware_ranking.as_slice(),
            best_by_pp512: findings.best_by_pp512.map(ConfigurationSummary::from),
            best_by_tg128: findings.best_by_tg128.map(ConfigurationSummary::from),
        }
    }
}
