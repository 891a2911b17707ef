use thiserror::Error;

/// Failures reported before a network is built, run, or trained.
///
/// All checks happen up front; no weight is touched when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetError {
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("training set is empty")]
    EmptyTrainingSet,
}

impl NetError {
    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), NetError> {
        if expected == actual {
            Ok(())
        } else {
            Err(NetError::DimensionMismatch { what, expected, actual })
        }
    }
}
