//!
//! The section label classification tests.
//!

use super::classify;
use crate::model::report::name::ConfigurationName;

#[test]
fn cpu_only() {
    let result = classify("CPU-Only Inference (64 threads)");
    assert_eq!(result, ConfigurationName::CpuOnly);
}

#[test]
fn quad_takes_precedence_over_dual() {
    let result = classify("Quad GPU Run (Dual-Socket Host)");
    assert_eq!(result, ConfigurationName::QuadGpu);
}

#[test]
fn quad_balanced() {
    let result = classify("Quad GPU (Balanced Split)");
    assert_eq!(result, ConfigurationName::QuadGpuBalanced);
}

#[test]
fn quad_custom() {
    let result = classify("Quad GPU Custom Tensor Split");
    assert_eq!(result, ConfigurationName::QuadGpuCustom);
}

#[test]
fn partial_takes_precedence_over_full() {
    let result = classify("Partial GPU Offload (Full Model Later)");
    assert_eq!(result, ConfigurationName::GpuPartial);
}

#[test]
fn full_offload() {
    let result = classify("Full GPU Offload (99 layers)");
    assert_eq!(result, ConfigurationName::GpuFull);
}

#[test]
fn single_gpu() {
    let result = classify("Single GPU Baseline");
    assert_eq!(result, ConfigurationName::SingleGpu);
}

#[test]
fn dual_gpu() {
    let result = classify("Dual GPU Layer Split");
    assert_eq!(result, ConfigurationName::DualGpu);
}

#[test]
fn unknown() {
    let result = classify("Warmup pass");
    assert_eq!(result, ConfigurationName::Unknown);
}
