//!
//! The benchmark report parser.
//!

#[cfg(test)]
mod tests;

pub mod state;
pub mod taxonomy;

use std::path::Path;

use crate::model::report::BenchmarkReport;

use self::state::SectionAccumulator;
use self::state::State;

///
/// The benchmark report parser.
///
/// Consumes the full text of one report and produces a [BenchmarkReport].
/// Malformed rows never fail the parse; they are skipped and parsing
/// continues. Only reading the source file is a hard error.
///
#[derive(Debug)]
pub struct Parser {
    /// Compiled section header pattern.
    header: regex::Regex,
    /// Results-table row marker of the target model, including the leading
    /// cell separator.
    row_marker: String,
}

impl Parser {
    /// The model whose table rows are sampled unless overridden.
    pub const DEFAULT_MODEL: &'static str = "qwen3 8B";

    /// Prefix of a test section header candidate.
    const HEADER_PREFIX: &'static str = "## Test ";

    /// Marker of a run that silently fell back to the processor.
    const CUDA_FAILURE_MARKER: &'static str = "failed to initialize CUDA";

    ///
    /// Creates a parser sampling the table rows of `model`.
    ///
    pub fn new(model: &str) -> Self {
        Self {
            header: regex::Regex::new(r"^## Test\s+(-?\d+)\s*:(.*)$").expect("Always valid"),
            row_marker: format!("| {model}"),
        }
    }

    ///
    /// Reads and parses one report file.
    ///
    pub fn parse_file(&self, path: &Path) -> anyhow::Result<BenchmarkReport> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Benchmark report file {path:?} reading: {error}"))?;
        let source_id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.parse(source_id.as_str(), text.as_str()))
    }

    ///
    /// Parses the full text of one report.
    ///
    pub fn parse(&self, source_id: &str, text: &str) -> BenchmarkReport {
        let mut report = BenchmarkReport::new(source_id.to_owned());
        let mut state = State::OutsideSection;
        let mut section: Option<SectionAccumulator> = None;

        for line in text.lines() {
            Self::extract_metadata(line, &mut report);

            if line.starts_with(Self::HEADER_PREFIX) && line.contains(':') {
                if let Some(captures) = self.header.captures(line) {
                    let test_index = match captures[1].parse::<i64>() {
                        Ok(test_index) => test_index,
                        Err(_) => continue,
                    };
                    if let Some(configuration) =
                        section.take().and_then(SectionAccumulator::finalize)
                    {
                        report.configurations.push(configuration);
                    }
                    let label = captures
                        .get(2)
                        .map(|label| label.as_str())
                        .unwrap_or_default()
                        .trim();
                    section = Some(SectionAccumulator::new(
                        taxonomy::classify(label),
                        test_index,
                    ));
                    state = State::AwaitingTable;
                }
                // A header-like line with a non-integer ordinal is inert.
                continue;
            }

            if line.contains(Self::CUDA_FAILURE_MARKER) {
                if let Some(section) = section.as_mut() {
                    section.mark_cpu_fallback();
                }
            } else if line.contains("| model") && line.contains("test") && line.contains("t/s") {
                if section.is_some() {
                    state = State::ReadingTable;
                }
            } else if state == State::ReadingTable && line.contains(self.row_marker.as_str()) {
                if let Some(section) = section.as_mut() {
                    Self::sample_row(line, section);
                }
            }
        }

        if let Some(configuration) = section.and_then(SectionAccumulator::finalize) {
            report.configurations.push(configuration);
        }

        report
    }

    ///
    /// Extracts report-level metadata, independent of the section state.
    ///
    fn extract_metadata(line: &str, report: &mut BenchmarkReport) {
        if let Some((_, rest)) = line.split_once("**Node:**") {
            report.node = Some(rest.trim().to_owned());
        } else if let Some((_, rest)) = line.split_once("**GPUs per Node:**") {
            report.gpu_count = rest.trim().parse::<u32>().ok().filter(|count| *count > 0);
        } else if line.contains("Device 0:") && line.contains("NVIDIA") {
            if let Some((_, rest)) = line.split_once("NVIDIA") {
                let model = rest.split(',').next().unwrap_or_default().trim();
                report.gpu_type = Some(format!("NVIDIA {model}"));
            }
        }
    }

    ///
    /// Reads the metric samples out of one results-table data row.
    ///
    /// A row with too few cells, or a value cell that does not parse, stops
    /// contributing at the point of failure; samples read before it are kept.
    ///
    fn sample_row(line: &str, section: &mut SectionAccumulator) {
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if cells.len() < 7 {
            return;
        }
        for (index, cell) in cells.iter().enumerate() {
            let samples = if cell.contains("pp512") {
                &mut section.pp512_samples
            } else if cell.contains("tg128") {
                &mut section.tg128_samples
            } else {
                continue;
            };
            let value = match cells
                .get(index + 1)
                .map(|neighbour| Self::parse_throughput(neighbour))
            {
                Some(Ok(value)) => value,
                _ => return,
            };
            samples.push(value);
        }
    }

    ///
    /// Parses a throughput cell, truncating at the standard deviation suffix.
    ///
    fn parse_throughput(cell: &str) -> Result<f64, std::num::ParseFloatError> {
        cell.split('±').next().unwrap_or_default().trim().parse()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MODEL)
    }
}
