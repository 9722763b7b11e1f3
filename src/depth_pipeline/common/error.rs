use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthError {
    #[error("{what} must be at least {expected} bytes long (got {actual})")]
    InputTooShort {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what} must be exactly {expected} bytes long (got {actual})")]
    UnexpectedSize {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Depth table is not monotonic at index {index}")]
    NonMonotonicLut { index: usize },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DepthError {
    /// Checks a buffer against its minimum contract size.
    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if actual < expected {
            return Err(DepthError::InputTooShort {
                what,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, DepthError>;
