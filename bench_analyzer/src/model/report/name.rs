//!
//! The configuration name taxonomy.
//!

use serde::Serialize;

///
/// The configuration name taxonomy.
///
/// The set of labels is fixed; section headers are mapped onto it by the
/// classification rules in [crate::input::taxonomy].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigurationName {
    /// Processor-only run, the speedup baseline.
    #[serde(rename = "CPU-Only")]
    CpuOnly,
    /// Partial layer offload to one accelerator.
    #[serde(rename = "GPU Partial")]
    GpuPartial,
    /// Full layer offload to one accelerator.
    #[serde(rename = "GPU Full")]
    GpuFull,
    /// Explicit single-accelerator run.
    #[serde(rename = "Single GPU")]
    SingleGpu,
    /// Four accelerators with balanced layer split.
    #[serde(rename = "Quad GPU (Balanced)")]
    QuadGpuBalanced,
    /// Four accelerators with a custom layer split.
    #[serde(rename = "Quad GPU (Custom)")]
    QuadGpuCustom,
    /// Four accelerators, unspecified split.
    #[serde(rename = "Quad GPU")]
    QuadGpu,
    /// Two accelerators.
    #[serde(rename = "Dual GPU")]
    DualGpu,
    /// None of the recognized labels matched.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ConfigurationName {
    ///
    /// Whether the configuration belongs to the single-accelerator bucket of
    /// the scaling analysis.
    ///
    pub fn is_single_gpu_class(self) -> bool {
        matches!(self, Self::SingleGpu | Self::GpuFull)
    }

    ///
    /// Whether the configuration belongs to the multi-accelerator bucket of
    /// the scaling analysis.
    ///
    pub fn is_multi_gpu_class(self) -> bool {
        matches!(
            self,
            Self::DualGpu | Self::QuadGpu | Self::QuadGpuBalanced | Self::QuadGpuCustom
        )
    }
}

impl ConfigurationName {
    ///
    /// The display label of the configuration.
    ///
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CpuOnly => "CPU-Only",
            Self::GpuPartial => "GPU Partial",
            Self::GpuFull => "GPU Full",
            Self::SingleGpu => "Single GPU",
            Self::QuadGpuBalanced => "Quad GPU (Balanced)",
            Self::QuadGpuCustom => "Quad GPU (Custom)",
            Self::QuadGpu => "Quad GPU",
            Self::DualGpu => "Dual GPU",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ConfigurationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` keeps the fill and alignment flags of table cells working.
        f.pad(self.as_str())
    }
}
