use thiserror::Error;

/// Failures a statistics request can produce. The display strings are the
/// wire messages clients see in the `error` field, so they stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `nums` query parameter was absent or empty.
    #[error("nums are required.")]
    MissingInput,

    /// A token in the comma-separated list did not parse as a number.
    /// Carries the offending token verbatim.
    #[error("{0} is not a number.")]
    NotANumber(String),
}
