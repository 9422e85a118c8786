use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result,
};

pub type Result<T> = result::Result<T, ErrorType>;

#[derive(Debug, Clone, PartialEq)]
/// Enum with all errors a view or reader can report.
///
/// Only start positions of sub views and cursor reads are checked,
/// everything else is a documented precondition of the caller.
pub enum ErrorType {
    RangeError(String),
}

impl ErrorType {
    pub(crate) fn position_out_of_range(pos: usize, size: usize) -> ErrorType {
        ErrorType::RangeError(format!("pos ({}) > size ({})", pos, size))
    }

    pub(crate) fn offset_out_of_range(end: Option<usize>, size: usize) -> ErrorType {
        match end {
            Some(end) => ErrorType::RangeError(format!("offset ({}) is out of range ({})", end, size)),
            None => ErrorType::RangeError(format!("offset overflows usize, size is {}", size)),
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::RangeError(msg) => write!(
                fmt,
                "Range error: {}.",
                msg
            ),
        }
    }
}

impl Error for ErrorType {}
