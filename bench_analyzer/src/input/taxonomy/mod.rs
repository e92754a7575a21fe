//!
//! Classification of section header labels into the configuration taxonomy.
//!

#[cfg(test)]
mod tests;

use crate::model::report::name::ConfigurationName;

///
/// A classification rule: a substring to search for in the section label, and
/// a constructor refining the match into a configuration name.
///
type Rule = (&'static str, fn(&str) -> ConfigurationName);

/// Rules are evaluated in this exact order, first match wins. Some labels are
/// substrings of others, so the order is load-bearing: `Quad GPU` must be
/// checked before `Dual GPU`.
const RULES: &[Rule] = &[
    ("CPU-Only", cpu_only),
    ("Partial", gpu_partial),
    ("Full", gpu_full),
    ("Single GPU", single_gpu),
    ("Quad GPU", quad_gpu),
    ("Dual GPU", dual_gpu),
];

///
/// Maps a section header label onto the configuration taxonomy.
///
pub fn classify(label: &str) -> ConfigurationName {
    for (needle, constructor) in RULES {
        if label.contains(needle) {
            return constructor(label);
        }
    }
    ConfigurationName::Unknown
}

fn cpu_only(_label: &str) -> ConfigurationName {
    ConfigurationName::CpuOnly
}

fn gpu_partial(_label: &str) -> ConfigurationName {
    ConfigurationName::GpuPartial
}

fn gpu_full(_label: &str) -> ConfigurationName {
    ConfigurationName::GpuFull
}

fn single_gpu(_label: &str) -> ConfigurationName {
    ConfigurationName::SingleGpu
}

fn quad_gpu(label: &str) -> ConfigurationName {
    if label.contains("Balanced") {
        ConfigurationName::QuadGpuBalanced
    } else if label.contains("Custom") {
        ConfigurationName::QuadGpuCustom
    } else {
        ConfigurationName::QuadGpu
    }
}

fn dual_gpu(_label: &str) -> ConfigurationName {
    ConfigurationName::DualGpu
}
