//!
//! The aggregation engine deriving comparative statistics from parsed reports.
//!


pub mod error;
pub mod findings;

use std::collections::BTreeMap;

use crate::model::report::BenchmarkReport;
use crate::util::mean;

use self::error::Error;
use self::findings::ConfigurationRef;
use self::findings::ScalingVerdict;
use self::findings::SpeedupEntry;

///
/// Comparative statistics derived from an ordered collection of reports.
///
/// Report order is discovery order; it decides the baseline and best-of
/// tie-breaks, so callers must keep it deterministic.
///
#[derive(Debug)]
pub struct AggregateFindings<'a> {
    /// The first processor-only configuration encountered, if any.
    pub baseline: Option<ConfigurationRef<'a>>,
    /// Speedups of accelerated configurations over the baseline.
    /// Empty when there is no baseline.
    pub speedups: Vec<SpeedupEntry<'a>>,
    /// The multi-accelerator scaling verdict.
    pub scaling: ScalingVerdict,
    /// Mean prompt-processing throughput per accelerator model, sorted by
    /// model name. Only rendered when at least two models are present.
    pub hardware_ranking: Vec<(String, f64)>,
    /// The configuration maximizing prompt-processing throughput.
    pub best_by_pp512: Option<ConfigurationRef<'a>>,
    /// The configuration maximizing text-generation throughput.
    pub best_by_tg128: Option<ConfigurationRef<'a>>,
}

impl<'a> AggregateFindings<'a> {
    ///
    /// Computes the findings over the full report collection.
    ///
    pub fn collect(reports: &'a [BenchmarkReport]) -> Result<Self, Error> {
        if reports
            .iter()
            .all(|report| report.configurations.is_empty())
        {
            return Err(Error::NoData);
        }

        let baseline = Self::find_baseline(reports);
        let speedups = match baseline {
            Some(baseline) => Self::collect_speedups(reports, baseline),
            None => Vec::new(),
        };
        let scaling = Self::scaling_verdict(reports);
        let hardware_ranking = Self::hardware_ranking(reports);
        let (best_by_pp512, best_by_tg128) = Self::best_configurations(reports);

        Ok(Self {
            baseline,
            speedups,
            scaling,
            hardware_ranking,
            best_by_pp512,
            best_by_tg128,
        })
    }

    ///
    /// The first processor-only configuration in report order, then stored
    /// configuration order. First match wins even if later processor-only
    /// runs performed differently.
    ///
    fn find_baseline(reports: &'a [BenchmarkReport]) -> Option<ConfigurationRef<'a>> {
        for report in reports {
            for configuration in report.configurations.iter() {
                if configuration.is_cpu_only {
                    return Some(ConfigurationRef {
                        report,
                        configuration,
                    });
                }
            }
        }
        None
    }

    ///
    /// Speedups of every accelerated configuration over the baseline, in
    /// display order.
    ///
    fn collect_speedups(
        reports: &'a [BenchmarkReport],
        baseline: ConfigurationRef<'a>,
    ) -> Vec<SpeedupEntry<'a>> {
        let mut speedups = Vec::new();
        for report in reports {
            for configuration in report.sorted_configurations() {
                if configuration.is_cpu_only {
                    continue;
                }
                speedups.push(SpeedupEntry {
                    subject: ConfigurationRef {
                        report,
                        configuration,
                    },
                    pp512: Self::ratio(configuration.pp512, baseline.configuration.pp512),
                    tg128: Self::ratio(configuration.tg128, baseline.configuration.tg128),
                });
            }
        }
        speedups
    }

    ///
    /// Speedup of `value` over `baseline`, unavailable for a zero baseline.
    ///
    fn ratio(value: f64, baseline: f64) -> Option<f64> {
        (baseline > 0.0).then(|| value / baseline)
    }

    ///
    /// Partitions accelerated configurations into single- and multi-GPU
    /// buckets and compares their mean prompt-processing throughput.
    ///
    fn scaling_verdict(reports: &'a [BenchmarkReport]) -> ScalingVerdict {
        let mut single = Vec::new();
        let mut multi = Vec::new();
        for report in reports {
            for configuration in report.configurations.iter() {
                if configuration.is_cpu_only {
                    continue;
                }
                if configuration.name.is_single_gpu_class() {
                    single.push(configuration.pp512);
                } else if configuration.name.is_multi_gpu_class() {
                    multi.push(configuration.pp512);
                }
            }
        }
        if single.is_empty() || multi.is_empty() {
            return ScalingVerdict::InsufficientData;
        }
        let single_mean = mean(single.as_slice());
        let multi_mean = mean(multi.as_slice());
        ScalingVerdict::Scaling {
            single_mean,
            multi_mean,
            delta_percent: (multi_mean - single_mean) / single_mean * 100.0,
        }
    }

    ///
    /// Mean prompt-processing throughput of accelerated configurations per
    /// accelerator model. Reports without a model string are ignored.
    ///
    fn hardware_ranking(reports: &'a [BenchmarkReport]) -> Vec<(String, f64)> {
        let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for report in reports {
            let gpu_type = match report.gpu_type.as_deref() {
                Some(gpu_type) => gpu_type,
                None => continue,
            };
            for configuration in report.configurations.iter() {
                if !configuration.is_cpu_only {
                    groups
                        .entry(gpu_type)
                        .or_default()
                        .push(configuration.pp512);
                }
            }
        }
        groups
            .into_iter()
            .map(|(gpu_type, values)| (gpu_type.to_owned(), mean(values.as_slice())))
            .collect()
    }

    ///
    /// The configurations maximizing each metric across the whole collection,
    /// processor-only runs included. Strict comparison keeps the first
    /// encountered on ties.
    ///
    fn best_configurations(
        reports: &'a [BenchmarkReport],
    ) -> (Option<ConfigurationRef<'a>>, Option<ConfigurationRef<'a>>) {
        let mut best_by_pp512: Option<ConfigurationRef<'a>> = None;
        let mut best_by_tg128: Option<ConfigurationRef<'a>> = None;
        for report in reports {
            for configuration in report.configurations.iter() {
                let candidate = ConfigurationRef {
                    report,
                    configuration,
                };
                if best_by_pp512
                    .map_or(true, |best| configuration.pp512 > best.configuration.pp512)
                {
                    best_by_pp512 = Some(candidate);
                }
                if best_by_tg128
                    .map_or(true, |best| configuration.tg128 > best.configuration.tg128)
                {
                    best_by_tg128 = Some(candidate);
                }
            }
        }
        (best_by_pp512, best_by_tg128)
    }
}
