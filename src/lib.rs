//! # Pourover
//!
//! Four handlers for the same drink-vending request endpoint, each validating
//! the identical order grammar with a progressively more structured
//! technique: manual field checks, a flat schema with a cross-field pass,
//! discriminated-union schemas, and capability-based dispatch. The point is
//! the comparison: every handler accepts and rejects the same orders, so the
//! differences that remain are purely about where the validation logic lives
//! and what the compiler can check for you.
//!
//! ## Quick Example
//!
//! ```rust
//! use pourover::handler::tagged;
//!
//! let response = tagged::handle(&serde_json::json!({
//!     "drink": { "drink_type": "green_tea", "region": "famous_region" },
//!     "cup_type": "paper_cup",
//! }));
//!
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, "served green tea");
//!
//! let response = tagged::handle(&serde_json::json!({
//!     "drink": { "drink_type": "juice" },
//!     "cup_type": "paper_cup",
//! }));
//!
//! assert_eq!(response.status_code, 400);
//! ```
//!
//! Each handler is documented in [`handler`]; the order grammar lives in
//! [`model`], and the serve side effect (a `tracing` line standing in for
//! hardware control) in [`serve`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod handler;
pub mod model;
pub mod nonempty;
pub mod response;
pub mod semigroup;
pub mod serve;
pub mod validation;

// Re-exports
pub use error::ServeError;
pub use nonempty::NonEmptyVec;
pub use response::ServeResponse;
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ServeError;
    pub use crate::model::{
        Bean, ClosedSet, CupType, Density, Drink, DrinkType, Mode, Region, ServeMode, ServeRequest,
    };
    pub use crate::nonempty::NonEmptyVec;
    pub use crate::response::ServeResponse;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
