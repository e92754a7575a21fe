//!
//! The benchmark report representation.
//!

pub mod configuration;
pub mod name;

use serde::Serialize;

use self::configuration::ConfigurationResult;

///
/// The benchmark report representation.
///
/// One instance corresponds to one source file. It is assembled by the report
/// parser and never mutated afterwards.
///
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Identifier of the originating file.
    pub source_id: String,
    /// Hostname or node label from the report metadata, if present.
    pub node: Option<String>,
    /// Accelerator model string from the report metadata, if present.
    pub gpu_type: Option<String>,
    /// Number of accelerators per node, if present and positive.
    pub gpu_count: Option<u32>,
    /// Measured configurations in the order their sections appeared.
    pub configurations: Vec<ConfigurationResult>,
}

impl BenchmarkReport {
    ///
    /// Creates an empty report for the given source identifier.
    ///
    pub fn new(source_id: String) -> Self {
        Self {
            source_id,
            node: None,
            gpu_type: None,
            gpu_count: None,
            configurations: Vec::new(),
        }
    }

    ///
    /// Returns the configurations sorted for display: by their section ordinal,
    /// ties keeping the original insertion order.
    ///
    pub fn sorted_configurations(&self) -> Vec<&ConfigurationResult> {
        let mut configurations: Vec<&ConfigurationResult> = self.configurations.iter().collect();
        configurations.sort_by_key(|configuration| configuration.test_index);
        configurations
    }

    ///
    /// Whether the report contains at least one accelerated configuration.
    ///
    pub fn has_accelerated_configurations(&self) -> bool {
        self.configurations
            .iter()
            .any(|configuration| !configuration.is_cpu_only)
    }
}
