//!
//! The llama-bench analyzer binary.
//!

pub(crate) mod arguments;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let parser = llama_bench_analyzer::Parser::new(arguments.model.as_str());

    let output_path = arguments.output_file.unwrap_or_else(|| {
        arguments.input_dir.join(format!(
            "analysis_{}.md",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ))
    });
    let mut sink = llama_bench_analyzer::Tee::create(output_path)?;

    llama_bench_analyzer::output::report::write_header(
        &mut sink,
        chrono::Local::now(),
        arguments.input_dir.as_path(),
    )?;

    let resolution_pattern = format!(
        "{}/{}",
        arguments.input_dir.to_string_lossy(),
        arguments.pattern
    );
    let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
        .filter_map(Result::ok)
        .collect();
    paths.sort();

    if paths.is_empty() {
        writeln!(sink)?;
        writeln!(sink, "No benchmark files found")?;
        sink.finish()?;
        return Ok(());
    }

    writeln!(sink, "Found {} benchmark file(s)", paths.len())?;

    let mut reports = Vec::with_capacity(paths.len());
    for path in paths.into_iter() {
        writeln!(
            sink,
            "  - {}",
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        )?;
        match parser.parse_file(path.as_path()) {
            Ok(report) if !report.configurations.is_empty() => {
                writeln!(
                    sink,
                    "    -> Parsed {} configuration(s)",
                    report.configurations.len()
                )?;
                reports.push(report);
            }
            Ok(_) => {}
            Err(error) => {
                writeln!(sink, "    Error: {error}")?;
            }
        }
    }

    let findings = match llama_bench_analyzer::AggregateFindings::collect(reports.as_slice()) {
        Ok(findings) => findings,
        Err(llama_bench_analyzer::AnalysisError::NoData) => {
            writeln!(sink)?;
            writeln!(sink, "No valid results found")?;
            sink.finish()?;
            return Ok(());
        }
    };

    let report_path = sink.path().to_path_buf();
    llama_bench_analyzer::output::report::write_all(
        &mut sink,
        reports.as_slice(),
        &findings,
        report_path.as_path(),
    )?;

    if let Some(json_path) = arguments.json {
        let json = llama_bench_analyzer::JsonOutput::try_from(&findings)?;
        json.write_to_file(json_path.as_path())?;
    }

    let report_path = sink.finish()?;
    println!();
    println!(
        "{}",
        format!("Analysis saved to: {}", report_path.display()).green()
    );

    Ok(())
}
