use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured error raised by push-down operations and value parsing.
/// Every failure is a deterministic function of its inputs and is reported
/// synchronously at the call that caused it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a predicate-origin invalid-argument error.
    pub(crate) fn predicate_invalid(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvalidArgument,
            ErrorOrigin::Predicate,
            message,
        )
    }

    /// Construct a range-origin invalid-argument error.
    pub(crate) fn range_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidArgument, ErrorOrigin::Range, message)
    }

    /// Construct a mapping-origin invalid-argument error.
    pub(crate) fn mapping_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidArgument, ErrorOrigin::Mapping, message)
    }

    /// Construct a value-origin invalid-argument error.
    pub(crate) fn value_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidArgument, ErrorOrigin::Value, message)
    }

    /// Construct a mapping-origin fatal error.
    pub(crate) fn mapping_fatal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Fatal, ErrorOrigin::Mapping, message)
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidArgument)
    }

    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self.class, ErrorClass::Fatal)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
///
/// `InvalidArgument` is recoverable by the caller.
/// `Fatal` marks an environment or data defect and must not be retried.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    InvalidArgument,
    Fatal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Fatal => "fatal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorOrigin {
    Mapping,
    Predicate,
    Range,
    Value,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mapping => "mapping",
            Self::Predicate => "predicate",
            Self::Range => "range",
            Self::Value => "value",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_class_renders_origin_and_class() {
        let err = Error::range_invalid("Invalid range: no endpoints");

        assert_eq!(err.to_string(), "Invalid range: no endpoints");
        assert_eq!(
            err.display_with_class(),
            "range:invalid_argument: Invalid range: no endpoints"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_fatal());
    }

    #[test]
    fn fatal_errors_are_classified_as_fatal() {
        let err = Error::mapping_fatal("[FATAL] Cannot decode UTF-8");

        assert!(err.is_fatal());
        assert_eq!(err.origin, ErrorOrigin::Mapping);
    }
}
