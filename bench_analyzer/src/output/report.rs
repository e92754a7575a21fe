//!
//! The formatted text rendering of the analysis.
//!
//! The CPU-baseline block and the two five-column tables are a contract with
//! the downstream chart generator, which locates its data by pattern matching
//! against these exact layouts. Do not reword or reorder them.
//!

use std::path::Path;

use crate::analysis::findings::ConfigurationRef;
use crate::analysis::findings::ScalingVerdict;
use crate::analysis::AggregateFindings;
use crate::model::report::BenchmarkReport;

/// Width of the section banners.
const BANNER_WIDTH: usize = 70;

///
/// Writes a section banner preceded by a blank line.
///
pub fn write_banner<W>(w: &mut W, title: &str) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    writeln!(w)?;
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    Ok(())
}

///
/// Writes the opening banner with the generation timestamp and the scanned
/// directory.
///
pub fn write_header<W>(
    w: &mut W,
    generated: chrono::DateTime<chrono::Local>,
    directory: &Path,
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(w, "LLAMA.CPP BENCHMARK ANALYSIS")?;
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(w, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(w)?;
    writeln!(w, "Scanning directory: {}", directory.display())?;
    Ok(())
}

///
/// Writes the analysis body: detailed results, the comparison table, the
/// speedup analysis when a baseline exists, and the key findings.
///
pub fn write_all<W>(
    w: &mut W,
    reports: &[BenchmarkReport],
    findings: &AggregateFindings<'_>,
    output_path: &Path,
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    write_banner(w, "DETAILED RESULTS BY CONFIGURATION")?;
    match findings.baseline {
        Some(baseline) => {
            writeln!(w)?;
            writeln!(w, "CPU-Only Baseline ({}):", baseline.node_or("Unknown"))?;
            writeln!(
                w,
                "   Prompt Processing: {:.2} t/s",
                baseline.configuration.pp512
            )?;
            writeln!(
                w,
                "   Text Generation:   {:.2} t/s",
                baseline.configuration.tg128
            )?;
        }
        None => {
            writeln!(w)?;
            writeln!(w, "No CPU baseline found!")?;
        }
    }

    write_gpu_configurations(w, reports)?;
    write_comparison_table(w, reports)?;
    if let Some(baseline) = findings.baseline {
        write_speedup_analysis(w, baseline, findings)?;
    }
    write_key_findings(w, findings)?;

    write_banner(w, "ANALYSIS COMPLETE")?;
    writeln!(w)?;
    writeln!(w, "Analysis saved to: {}", output_path.display())?;
    Ok(())
}

///
/// Writes the per-node listing of accelerated configurations.
///
fn write_gpu_configurations<W>(w: &mut W, reports: &[BenchmarkReport]) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    writeln!(w)?;
    writeln!(w, "{}", "-".repeat(BANNER_WIDTH))?;
    writeln!(w, "GPU CONFIGURATIONS")?;
    writeln!(w, "{}", "-".repeat(BANNER_WIDTH))?;

    for report in reports {
        if !report.has_accelerated_configurations() {
            continue;
        }
        writeln!(w)?;
        writeln!(w, "Node: {}", report.node.as_deref().unwrap_or("Unknown"))?;
        writeln!(
            w,
            "   GPU: {}",
            report.gpu_type.as_deref().unwrap_or("Unknown")
        )?;
        writeln!(
            w,
            "   GPU Count: {}",
            report
                .gpu_count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "N/A".to_owned())
        )?;
        writeln!(w)?;
        for configuration in report.sorted_configurations() {
            if configuration.is_cpu_only {
                continue;
            }
            writeln!(
                w,
                "   {:25} | pp512: {:8.2} t/s | tg128: {:6.2} t/s",
                configuration.name, configuration.pp512, configuration.tg128
            )?;
        }
    }
    Ok(())
}

///
/// Writes the five-column comparison table covering every configuration.
///
fn write_comparison_table<W>(w: &mut W, reports: &[BenchmarkReport]) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    write_banner(w, "COMPREHENSIVE COMPARISON TABLE")?;
    writeln!(w)?;
    writeln!(
        w,
        "| Node      | GPU Type     | Config              | Prompt (pp512) | Generation (tg128) |"
    )?;
    writeln!(
        w,
        "|-----------|--------------|---------------------|----------------|-------------------|"
    )?;

    for report in reports {
        let node = report.node.as_deref().unwrap_or("Unknown");
        let gpu_type = report.gpu_type.as_deref().unwrap_or("CPU");
        for configuration in report.sorted_configurations() {
            writeln!(
                w,
                "| {:9} | {:12} | {:19} | {:14.2} | {:17.2} |",
                node, gpu_type, configuration.name, configuration.pp512, configuration.tg128
            )?;
        }
    }
    Ok(())
}

///
/// Writes the baseline block and the speedup table.
///
fn write_speedup_analysis<W>(
    w: &mut W,
    baseline: ConfigurationRef<'_>,
    findings: &AggregateFindings<'_>,
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    write_banner(w, "SPEEDUP ANALYSIS")?;
    writeln!(w)?;
    writeln!(w, "CPU Baseline ({}):", baseline.node_or("Unknown"))?;
    writeln!(
        w,
        "  Prompt Processing: {:.2} t/s",
        baseline.configuration.pp512
    )?;
    writeln!(
        w,
        "  Text Generation:   {:.2} t/s",
        baseline.configuration.tg128
    )?;
    writeln!(w)?;
    writeln!(w, "GPU Speedups:")?;
    writeln!(w)?;
    writeln!(
        w,
        "| Node      | GPU Type     | Config              | Prompt Speedup | Generation Speedup |"
    )?;
    writeln!(
        w,
        "|-----------|--------------|---------------------|----------------|-------------------|"
    )?;

    for entry in findings.speedups.iter() {
        writeln!(
            w,
            "| {:9} | {:12} | {:19} | {} | {} |",
            entry.subject.node_or("Unknown"),
            entry.subject.gpu_type_or("Unknown"),
            entry.subject.configuration.name,
            speedup_cell(entry.pp512, 14),
            speedup_cell(entry.tg128, 17),
        )?;
    }
    Ok(())
}

///
/// Formats one speedup cell; unavailable metrics render `N/A`, which the
/// chart generator's row pattern skips.
///
fn speedup_cell(value: Option<f64>, width: usize) -> String {
    match value {
        Some(value) => format!("{value:width$.2}x"),
        None => format!("{:>width$}", "N/A", width = width + 1),
    }
}

///
/// Writes the key findings: best results, the scaling verdict, and the
/// hardware comparison.
///
fn write_key_findings<W>(w: &mut W, findings: &AggregateFindings<'_>) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    write_banner(w, "KEY FINDINGS")?;

    if let Some(best) = findings.best_by_pp512 {
        writeln!(w)?;
        writeln!(w, "1. Best Prompt Processing Performance:")?;
        writeln!(
            w,
            "   {} - {} - {}",
            best.node_or("Unknown"),
            best.gpu_type_or("Unknown"),
            best.configuration.name
        )?;
        writeln!(w, "   {:.2} t/s", best.configuration.pp512)?;
        if let Some(baseline) = findings.baseline {
            if baseline.configuration.pp512 > 0.0 {
                writeln!(
                    w,
                    "   Speedup: {:.2}x vs CPU",
                    best.configuration.pp512 / baseline.configuration.pp512
                )?;
            }
        }
    }

    if let Some(best) = findings.best_by_tg128 {
        writeln!(w)?;
        writeln!(w, "2. Best Text Generation Performance:")?;
        writeln!(
            w,
            "   {} - {} - {}",
            best.node_or("Unknown"),
            best.gpu_type_or("Unknown"),
            best.configuration.name
        )?;
        writeln!(w, "   {:.2} t/s", best.configuration.tg128)?;
        if let Some(baseline) = findings.baseline {
            if baseline.configuration.tg128 > 0.0 {
                writeln!(
                    w,
                    "   Speedup: {:.2}x vs CPU",
                    best.configuration.tg128 / baseline.configuration.tg128
                )?;
            }
        }
    }

    writeln!(w)?;
    writeln!(w, "3. Multi-GPU Scaling Analysis:")?;
    match findings.scaling {
        ScalingVerdict::Scaling {
            single_mean,
            multi_mean,
            delta_percent,
        } => {
            writeln!(w, "   Single GPU avg: {single_mean:.2} t/s (prompt)")?;
            writeln!(w, "   Multi GPU avg:  {multi_mean:.2} t/s (prompt)")?;
            if findings.scaling.is_positive() {
                writeln!(
                    w,
                    "   Multi-GPU shows positive scaling: {delta_percent:+.1}% performance gain"
                )?;
            } else {
                writeln!(
                    w,
                    "   Multi-GPU shows negative scaling: {delta_percent:+.1}% performance loss"
                )?;
                writeln!(w, "   Recommendation: use a single GPU for this model size")?;
            }
        }
        ScalingVerdict::InsufficientData => {
            writeln!(
                w,
                "   Insufficient data: both single- and multi-GPU runs are required"
            )?;
        }
    }

    if findings.hardware_ranking.len() >= 2 {
        writeln!(w)?;
        writeln!(w, "4. Hardware Comparison:")?;
        for (gpu_type, average) in findings.hardware_ranking.iter() {
            writeln!(w, "   {gpu_type}: {average:.2} t/s (avg prompt processing)")?;
        }
    }
    Ok(())
}
