//!
//! Errors occurring during aggregation.
//!

///
/// Errors occurring during aggregation.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No report contributed a single configuration, so there is nothing to
    /// aggregate. Callers report this condition and stop early.
    #[error("no configurations were parsed from any report")]
    NoData,
}
