//! Error types for connectivity resolution.

use std::fmt;

/// Errors from [`ConnectivityResolver::connect`](crate::ConnectivityResolver::connect).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectError {
    /// The global tunnel-attempt budget ran out with multiple regions
    /// still disjoint. The caller may retry with a new seed.
    RetryBudgetExhausted {
        /// Tunnel attempts consumed.
        attempts: usize,
        /// Regions still disjoint when the budget ran out.
        regions_remaining: usize,
    },
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RetryBudgetExhausted {
                attempts,
                regions_remaining,
            } => write!(
                f,
                "connectivity not reached after {attempts} tunnel attempts \
                 ({regions_remaining} regions remain)"
            ),
        }
    }
}

impl std::error::Error for ConnectError {}
