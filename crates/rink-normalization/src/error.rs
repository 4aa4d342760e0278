use thiserror::Error;

/// Why a raw cell could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("expected an integer, found {0:?}")]
    InvalidNumber(String),
    #[error("expected {expected} parts separated by {separator:?}, found {found} in {value:?}")]
    PartCount {
        value: String,
        separator: char,
        expected: &'static str,
        found: usize,
    },
    #[error("missing last name in {0:?}")]
    MissingLastName(String),
    #[error("expected a MM:SS clock, found {0:?}")]
    InvalidClock(String),
}

impl FieldError {
    pub(crate) fn parts(
        value: &str,
        separator: char,
        expected: &'static str,
        found: usize,
    ) -> Self {
        Self::PartCount {
            value: value.to_string(),
            separator,
            expected,
            found,
        }
    }
}
