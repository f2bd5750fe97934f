//! Variant 1: manual field checks
//!
//! The least structured technique: pull each field out of the raw JSON map,
//! check presence and membership by hand, and branch with nested matches. The
//! closed-set token lists keep the membership checks honest, and `?` keeps
//! the first-violation-wins ordering readable, but nothing here stops a
//! maintainer from forgetting a check; that is the point of the comparison.
//!
//! # Examples
//!
//! ```
//! use pourover::handler::naive;
//!
//! let response = naive::handle(&serde_json::json!({
//!     "drink_type": "coffee",
//!     "mode": "auto",
//!     "cup_type": "paper_cup",
//! }));
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, "served auto coffee");
//! ```

use serde_json::Value;

use crate::model::{Bean, ClosedSet, CupType, Density, DrinkType, Mode, Region};
use crate::response::ServeResponse;
use crate::serve;
use crate::ServeError;

/// Validate a flat payload by hand and serve the drink.
pub fn handle(payload: &Value) -> ServeResponse {
    match validate_and_serve(payload) {
        Ok(body) => ServeResponse::ok(body),
        Err(err) => ServeResponse::client_error(err.to_string()),
    }
}

/// Read a closed-set field from the payload
///
/// Absent and explicit-null both count as missing, matching how the endpoint
/// treats `payload.get(field)`. A present value that is not a string, or a
/// string outside the set, is out of range.
fn required<T: ClosedSet>(payload: &Value) -> Result<T, ServeError> {
    match payload.get(T::FIELD) {
        None | Some(Value::Null) => Err(ServeError::missing::<T>()),
        Some(value) => value
            .as_str()
            .and_then(T::from_token)
            .ok_or_else(ServeError::invalid::<T>),
    }
}

fn validate_and_serve(payload: &Value) -> Result<&'static str, ServeError> {
    let drink_type = required::<DrinkType>(payload)?;
    let cup_type = required::<CupType>(payload)?;

    match drink_type {
        DrinkType::Coffee => match required::<Mode>(payload)? {
            Mode::Auto => Ok(serve::auto_coffee(cup_type)),
            Mode::Custom => {
                let bean = required::<Bean>(payload)?;
                let density = required::<Density>(payload)?;
                Ok(serve::custom_coffee(bean, density, cup_type))
            }
        },
        DrinkType::GreenTea => {
            let region = required::<Region>(payload)?;
            Ok(serve::green_tea(region, cup_type))
        }
    }
}
