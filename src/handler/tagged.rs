//! Variant 3: discriminated-union schema
//!
//! The payload nests its variants and serde's tag machinery does the whole
//! job: `drink_type` selects which fields `drink` may carry, `mode` does the
//! same inside `serve_mode`, and an order that deserializes at all is fully
//! valid. There is no cross-field pass left to write: the handler body is a
//! single deserialize-then-serve.
//!
//! # Examples
//!
//! ```
//! use pourover::handler::tagged;
//!
//! let response = tagged::handle(&serde_json::json!({
//!     "drink": {
//!         "drink_type": "coffee",
//!         "serve_mode": { "mode": "custom", "bean": "famous_coffee", "density": "high" },
//!     },
//!     "cup_type": "my_cup",
//! }));
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, "served custom coffee");
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::model::ServeRequest;
use crate::response::ServeResponse;
use crate::serve;

/// Deserialize the nested request and serve it.
pub fn handle(payload: &Value) -> ServeResponse {
    match ServeRequest::deserialize(payload) {
        Ok(request) => ServeResponse::ok(serve::serve(&request)),
        Err(err) => ServeResponse::client_error(err.to_string()),
    }
}
