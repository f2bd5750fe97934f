//! Handler result type
//!
//! Every handler, whatever its validation technique, resolves to the same
//! small result: a numeric status and a message body. 200 means the drink was
//! served; 400 means the payload violated a constraint and names the first
//! one. There is deliberately no 500 path: exhaustive matching over the sum
//! types in [`model`](crate::model) leaves no unexpected branch to fall into.

use serde::Serialize;
use std::fmt;

/// Status code for a served drink.
pub const STATUS_OK: u16 = 200;
/// Status code for a payload that failed validation.
pub const STATUS_CLIENT_ERROR: u16 = 400;

/// The outcome of handling one serve request
///
/// # Examples
///
/// ```
/// use pourover::ServeResponse;
///
/// let ok = ServeResponse::ok("served green tea");
/// assert!(ok.is_success());
/// assert_eq!(ok.status_code, 200);
///
/// let err = ServeResponse::client_error("cup_type is required");
/// assert!(!err.is_success());
/// assert_eq!(err.status_code, 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServeResponse {
    /// 200 on success, 400 on a validation failure.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Confirmation message or the first violated constraint.
    pub body: String,
}

impl ServeResponse {
    /// A 200 response carrying the serve confirmation.
    pub fn ok(body: impl Into<String>) -> Self {
        ServeResponse {
            status_code: STATUS_OK,
            body: body.into(),
        }
    }

    /// A 400 response carrying the first violated constraint.
    pub fn client_error(message: impl Into<String>) -> Self {
        ServeResponse {
            status_code: STATUS_CLIENT_ERROR,
            body: message.into(),
        }
    }

    /// Whether the drink was served.
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

impl fmt::Display for ServeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.body)
    }
}
