//!
//! The benchmark report parser tests.
//!

use crate::input::Parser;
use crate::model::report::name::ConfigurationName;

#[test]
fn metadata() {
    let input = r#"
# Benchmark Results

**Node:** gx01
**GPUs per Node:** 4

ggml_cuda_init: found 4 CUDA devices:
  Device 0: NVIDIA A100-SXM4-80GB, compute capability 8.0, VMM: yes
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.node.as_deref(), Some("gx01"));
    assert_eq!(report.gpu_count, Some(4));
    assert_eq!(report.gpu_type.as_deref(), Some("NVIDIA A100-SXM4-80GB"));
    assert!(report.configurations.is_empty());
}

#[test]
fn non_numeric_gpu_count() {
    let input = "**GPUs per Node:** N/A\n";
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.gpu_count, None);
}

#[test]
fn section_without_samples_is_dropped() {
    let input = r#"
## Test 1: CPU-Only Inference

The run crashed before producing a results table.

## Test 2: Single GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 1432.64 ± 2.11 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].name, ConfigurationName::SingleGpu);
}

#[test]
fn samples_are_averaged() {
    let input = r#"
## Test 1: Single GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 200.0 ± 1.00 |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | tg128 | 50.0 ± 0.10 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].pp512, 150.0);
    assert_eq!(report.configurations[0].tg128, 50.0);
}

#[test]
fn metric_without_samples_is_zero() {
    let input = r#"
## Test 1: Single GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].pp512, 100.0);
    assert_eq!(report.configurations[0].tg128, 0.0);
}

#[test]
fn cuda_failure_reclassifies_as_cpu_only() {
    let input = r#"
## Test 3: Full GPU Offload

ggml_cuda_init: failed to initialize CUDA: no CUDA-capable device is detected

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CPU | 99 | pp512 | 25.30 ± 0.11 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].name, ConfigurationName::CpuOnly);
    assert!(report.configurations[0].is_cpu_only);
}

#[test]
fn non_integer_test_number_is_inert() {
    let input = r#"
## Test 1: Single GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |

## Test One: looks like a header, is not one

| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 300.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    // The malformed header must not finalize the active section, so the
    // trailing row still belongs to `Test 1`.
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].name, ConfigurationName::SingleGpu);
    assert_eq!(report.configurations[0].pp512, 200.0);
}

#[test]
fn malformed_value_cell_is_skipped() {
    let input = r#"
## Test 1: Single GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | garbled |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].pp512, 100.0);
}

#[test]
fn short_row_is_skipped() {
    let input = r#"
## Test 1: Single GPU

| model | size | params | backend | ngl | test | t/s |
| qwen3 8B | pp512 | 900.0 |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].pp512, 100.0);
}

#[test]
fn rows_outside_a_table_are_ignored() {
    let input = r#"
## Test 1: Single GPU

| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert!(report.configurations.is_empty());
}

#[test]
fn other_models_are_not_sampled() {
    let input = r#"
## Test 1: Single GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| llama 13B Q4_K - Medium | 7.33 GiB | 13.02 B | CUDA | 99 | pp512 | 700.0 ± 1.00 |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 100.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 1);
    assert_eq!(report.configurations[0].pp512, 100.0);
}

#[test]
fn sections_finalize_at_headers_and_end_of_input() {
    let input = r#"
## Test 1: CPU-Only Inference

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CPU | 0 | pp512 | 25.0 ± 0.10 |

## Test 2: Dual GPU

| model | size | params | backend | ngl | test | t/s |
| ----- | ---- | ------ | ------- | --- | ---- | --- |
| qwen3 8B Q4_K - Medium | 4.68 GiB | 8.19 B | CUDA | 99 | pp512 | 150.0 ± 1.00 |
"#;
    let report = Parser::default().parse("report.md", input);
    assert_eq!(report.configurations.len(), 2);
    assert_eq!(report.configurations[0].name, ConfigurationName::CpuOnly);
    assert_eq!(report.configurations[1].name, ConfigurationName::DualGpu);
    assert_eq!(report.configurations[1].test_index, 2);
}
