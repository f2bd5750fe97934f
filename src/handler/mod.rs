//! The four request handlers
//!
//! Each submodule implements the identical contract (take an untyped JSON
//! payload describing a drink order, validate it, serve the drink, return a
//! [`ServeResponse`](crate::ServeResponse)) with a progressively more
//! structured validation technique:
//!
//! | module | technique |
//! |---|---|
//! | [`naive`] | manual field checks, nested conditionals |
//! | [`schema`] | flat typed schema + cross-field [`Validation`](crate::Validation) pass |
//! | [`tagged`] | nested discriminated unions; serde is the validator |
//! | [`capability`] | tagged model + trait-object dispatch to a `serve` capability |
//!
//! All four agree on status for every payload their wire shape admits, and on
//! body for every valid order. Handling is a single synchronous call with no
//! state shared between requests; validating the same payload twice gives the
//! same answer twice.

pub mod capability;
pub mod naive;
pub mod schema;
pub mod tagged;
