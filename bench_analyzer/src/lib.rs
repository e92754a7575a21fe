//!
//! The llama-bench analyzer library.
//!

pub mod analysis;
pub mod input;
pub mod model;
pub mod output;
pub mod util;

pub use crate::analysis::error::Error as AnalysisError;
pub use crate::analysis::findings::ConfigurationRef;
pub use crate::analysis::findings::ScalingVerdict;
pub use crate::analysis::findings::SpeedupEntry;
pub use crate::analysis::AggregateFindings;
pub use crate::input::Parser;
pub use crate::model::report::configuration::ConfigurationResult;
pub use crate::model::report::name::ConfigurationName;
pub use crate::model::report::BenchmarkReport;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::sink::Tee;
