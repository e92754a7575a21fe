//!
//! The report parser state.
//!

use crate::model::report::configuration::ConfigurationResult;
use crate::model::report::name::ConfigurationName;
use crate::util::mean;

///
/// The parser state.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No test section has been entered yet, or the current line stream is
    /// between sections.
    OutsideSection,
    /// A section header has been seen; the results table has not started.
    AwaitingTable,
    /// The results table header has been seen; data rows are being sampled.
    ReadingTable,
}

///
/// Accumulates the samples of the test section being parsed.
///
/// Finalization is shared between section boundaries and end-of-input, so the
/// averaging and the drop rule live in exactly one place.
///
#[derive(Debug)]
pub struct SectionAccumulator {
    /// Classified configuration label of the section.
    pub name: ConfigurationName,
    /// Whether the section ran on the processor only.
    pub is_cpu_only: bool,
    /// Ordinal from the section header.
    pub test_index: i64,
    /// Prompt-processing throughput samples.
    pub pp512_samples: Vec<f64>,
    /// Text-generation throughput samples.
    pub tg128_samples: Vec<f64>,
}

impl SectionAccumulator {
    ///
    /// Starts accumulating a freshly classified section.
    ///
    pub fn new(name: ConfigurationName, test_index: i64) -> Self {
        Self {
            name,
            is_cpu_only: name == ConfigurationName::CpuOnly,
            test_index,
            pp512_samples: Vec::new(),
            tg128_samples: Vec::new(),
        }
    }

    ///
    /// Reclassifies the section as processor-only.
    ///
    /// Applied when the report shows that accelerator initialization failed
    /// mid-run: such sections measured the CPU fallback, whatever their header
    /// claimed.
    ///
    pub fn mark_cpu_fallback(&mut self) {
        self.name = ConfigurationName::CpuOnly;
        self.is_cpu_only = true;
    }

    ///
    /// Turns the accumulator into a configuration result.
    ///
    /// Returns `None` if neither metric collected a sample; such sections are
    /// dropped entirely.
    ///
    pub fn finalize(self) -> Option<ConfigurationResult> {
        if self.pp512_samples.is_empty() && self.tg128_samples.is_empty() {
            return None;
        }
        Some(ConfigurationResult {
            name: self.name,
            is_cpu_only: self.is_cpu_only,
            test_index: self.test_index,
            pp512: mean(self.pp512_samples.as_slice()),
            tg128: mean(self.tg128_samples.as_slice()),
        })
    }
}
