//! Benchmark setup error type.

use spanwise_core::ForestError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// A core routine rejected the generated input.
    #[error("core operation failed: {0}")]
    Forest(#[from] ForestError),
}
