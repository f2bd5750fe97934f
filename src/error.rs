//! Validation error taxonomy
//!
//! Exactly two things can go wrong with an order: a required field is absent,
//! or a present field holds a token outside its closed set. Both are client
//! errors, recovered at the boundary and rendered into a 400 response; nothing
//! here is fatal to the process.

use std::error::Error as StdError;
use std::fmt;

use crate::model::ClosedSet;

/// A violated constraint in a serve request
///
/// Carries enough to render the original-style message: the offending field,
/// the context that made it required, and the tokens that would have been
/// accepted.
///
/// # Examples
///
/// ```
/// use pourover::model::{Bean, CupType};
/// use pourover::ServeError;
///
/// assert_eq!(
///     ServeError::missing::<Bean>().to_string(),
///     "bean is required for custom coffee",
/// );
/// assert_eq!(
///     ServeError::invalid::<CupType>().to_string(),
///     "invalid cup_type: expected one of paper_cup, my_cup",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeError {
    /// A required field was absent (or explicitly null).
    MissingField {
        /// Payload key that was expected.
        field: &'static str,
        /// Context that made the field required, if conditional.
        required_for: Option<&'static str>,
    },
    /// A field held a token outside its closed set.
    InvalidEnum {
        /// Payload key that was out of range.
        field: &'static str,
        /// Tokens that would have been accepted.
        allowed: &'static [&'static str],
    },
}

impl ServeError {
    /// The missing-field error for a closed-set field.
    pub fn missing<T: ClosedSet>() -> Self {
        ServeError::MissingField {
            field: T::FIELD,
            required_for: T::REQUIRED_FOR,
        }
    }

    /// The out-of-range error for a closed-set field.
    pub fn invalid<T: ClosedSet>() -> Self {
        ServeError::InvalidEnum {
            field: T::FIELD,
            allowed: T::ALLOWED,
        }
    }

    /// The payload key this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            ServeError::MissingField { field, .. } => field,
            ServeError::InvalidEnum { field, .. } => field,
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::MissingField {
                field,
                required_for: None,
            } => write!(f, "{field} is required"),
            ServeError::MissingField {
                field,
                required_for: Some(context),
            } => write!(f, "{field} is required for {context}"),
            ServeError::InvalidEnum { field, allowed } => {
                write!(f, "invalid {field}: expected one of {}", allowed.join(", "))
            }
        }
    }
}

impl StdError for ServeError {}
