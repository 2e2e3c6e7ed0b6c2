use thiserror::Error;

/// Outcomes that stop extraction for one document.
///
/// A missing section or a row that matches no pattern is not an error; it
/// simply contributes no transactions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No registered layout had its full header set present
    #[error("unsupported bank statement format")]
    UnrecognizedLayout,

    /// A layout name was requested that is not in the registry
    #[error("unknown layout: {0}")]
    UnknownLayout(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
