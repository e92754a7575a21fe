//!
//! The llama-bench analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The llama-bench analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The directory scanned for benchmark report files.
    #[arg(long = "input-dir", default_value = ".")]
    pub input_dir: PathBuf,

    /// The report file name pattern inside the input directory.
    #[arg(long = "pattern", default_value = "benchmark_results*.md")]
    pub pattern: String,

    /// The model whose results-table rows are sampled.
    #[arg(long = "model", default_value = llama_bench_analyzer::Parser::DEFAULT_MODEL)]
    pub model: String,

    /// The analysis report file. If unset, a timestamped file is created in
    /// the input directory.
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Additionally writes the aggregate findings as JSON to this path.
    #[arg(long = "json")]
    pub json: Option<PathBuf>,
}
