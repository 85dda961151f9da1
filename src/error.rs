use std::fmt;

/// Error types for complex arithmetic, formatting, roots of unity and integration
#[derive(Clone, Debug, PartialEq)]
pub enum CxError {
    IllegalArgument(String),
    IllegalState(String),
    OutOfRange { index: i64, min: i64, max: i64 },
    ConvergenceFailure(usize),
    Parse { source: String, error_index: usize },
}

impl CxError {
    /// True for the only condition a caller may retry with a larger budget
    pub fn is_retryable(&self) -> bool {
        matches!(self, CxError::ConvergenceFailure(_))
    }

    /// True for rejected inputs, including out-of-range indices
    pub fn is_illegal_argument(&self) -> bool {
        matches!(self, CxError::IllegalArgument(_) | CxError::OutOfRange { .. })
    }
}

impl fmt::Display for CxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CxError::IllegalArgument(msg) => write!(f, "Illegal argument: {}", msg),
            CxError::IllegalState(msg) => write!(f, "Illegal state: {}", msg),
            CxError::OutOfRange { index, min, max } => {
                write!(f, "Index {} out of range [{}, {}]", index, min, max)
            }
            CxError::ConvergenceFailure(max) => {
                write!(f, "Failed to converge: maximal count ({}) exceeded", max)
            }
            CxError::Parse {
                source,
                error_index,
            } => write!(
                f,
                "Unparseable complex number: \"{}\" (error at index {})",
                source, error_index
            ),
        }
    }
}

impl std::error::Error for CxError {}
