//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
///
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing Errors
#[allow(missing_docs)] // Only to prevent warnings about struct fields not being documented
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// Failed to encode a model
    #[error("Failed to encode {0}")]
    EncodeError(&'static str),
    /// Failed to parse a struct
    #[error("Failed to parse {0}")]
    StructParseFailure(&'static str),
    /// Failed to parse an enum
    #[error("Failed to parse enum: {0}")]
    EnumParseFailure(&'static str),
    /// Failed to parse or format a timestamp
    #[error("Failed to parse or format a date-time")]
    DateTimeParsingError,
}
