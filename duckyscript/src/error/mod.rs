use std::num::ParseIntError;

use thiserror::Error;

use crate::codegen::report::MAX_KEYS;

pub type LineResult<T> = Result<T, LineError>;

/// Why a single script line produced no output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("invalid delay `{value}`: {source}")]
    InvalidDelay {
        value: String,
        source: ParseIntError,
    },

    #[error("delay of {0} ms is longer than the payload can hold")]
    DelayTooLong(u32),

    #[error("unknown key or modifier `{0}`")]
    UnknownToken(String),

    #[error("no key types {0:?}")]
    UnmappedCharacter(char),

    #[error("{0} keys held at once, at most {max} are supported", max = MAX_KEYS)]
    TooManyKeys(usize),
}

/// A line that failed to compile. Lines before and after it are unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {text}: {error}")]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// The trimmed source line.
    pub text: String,
    #[source]
    pub error: LineError,
}

/// Helper macro to create a `LineError::InvalidDelay`
#[macro_export]
macro_rules! invalid_delay {
    ($value:expr, $source:expr) => {
        $crate::error::LineError::InvalidDelay {
            value: ($value).to_string(),
            source: $source,
        }
    };
}
