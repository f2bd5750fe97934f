//! Variant 2: flat schema + cross-field validation
//!
//! The payload deserializes up front into [`FlatOrder`], a schema where every
//! mode-dependent field is optional. Presence and enum membership are the
//! deserializer's problem; what remains is the cross-field rule set (coffee
//! needs a mode, custom coffee needs a bean and a density, green tea needs a
//! region), expressed over the parsed value with [`Validation`] so that
//! independent violations accumulate instead of short-circuiting. The 400
//! body reports the first violation, keeping the same outward contract as the
//! other handlers.
//!
//! # Examples
//!
//! ```
//! use pourover::handler::schema;
//!
//! let response = schema::handle(&serde_json::json!({
//!     "drink_type": "green_tea",
//!     "region": "famous_region",
//!     "cup_type": "paper_cup",
//! }));
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, "served green tea");
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::model::{
    Bean, ClosedSet, CupType, Density, Drink, DrinkType, Mode, Region, ServeMode, ServeRequest,
};
use crate::response::ServeResponse;
use crate::serve;
use crate::{NonEmptyVec, ServeError, Validation};

/// The flat wire schema, before cross-field rules are applied
///
/// Mirrors the payload one-to-one: the discriminators are plain fields and
/// every variant-specific field is optional. Deserializing this type proves
/// each present field is in range; it says nothing yet about which fields
/// belong together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FlatOrder {
    /// Top-level discriminator.
    pub drink_type: DrinkType,
    /// Cup to serve into.
    pub cup_type: CupType,
    /// Coffee discriminator, meaningless for green tea.
    pub mode: Option<Mode>,
    /// Custom-coffee bean.
    pub bean: Option<Bean>,
    /// Custom-coffee density.
    pub density: Option<Density>,
    /// Green-tea region.
    pub region: Option<Region>,
}

/// Deserialize, refine, serve.
pub fn handle(payload: &Value) -> ServeResponse {
    let order = match FlatOrder::deserialize(payload) {
        Ok(order) => order,
        Err(err) => return ServeResponse::client_error(err.to_string()),
    };

    match refine(order).into_result() {
        Ok(request) => ServeResponse::ok(serve::serve(&request)),
        Err(violations) => ServeResponse::client_error(violations.head().to_string()),
    }
}

/// Apply the cross-field rules, producing a typed request
///
/// Violations accumulate: a custom coffee missing both `bean` and `density`
/// fails with both errors, in field order. The failure side is a
/// [`NonEmptyVec`], so taking the first violation is total.
pub fn refine(order: FlatOrder) -> Validation<ServeRequest, NonEmptyVec<ServeError>> {
    let cup_type = order.cup_type;
    drink_of(order).map(|drink| ServeRequest { drink, cup_type })
}

fn missing<T: ClosedSet>() -> NonEmptyVec<ServeError> {
    NonEmptyVec::singleton(ServeError::missing::<T>())
}

fn drink_of(order: FlatOrder) -> Validation<Drink, NonEmptyVec<ServeError>> {
    match order.drink_type {
        DrinkType::Coffee => match order.mode {
            None => Validation::failure(missing::<Mode>()),
            Some(Mode::Auto) => Validation::success(Drink::Coffee {
                serve_mode: ServeMode::Auto,
            }),
            Some(Mode::Custom) => {
                let bean = Validation::from_option(order.bean, missing::<Bean>());
                let density = Validation::from_option(order.density, missing::<Density>());
                bean.and(density).map(|(bean, density)| Drink::Coffee {
                    serve_mode: ServeMode::Custom { bean, density },
                })
            }
        },
        DrinkType::GreenTea => Validation::from_option(order.region, missing::<Region>())
            .map(|region| Drink::GreenTea { region }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_discriminator_names_the_field() {
        let response = handle(&json!({ "cup_type": "paper_cup" }));
        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("drink_type"), "got: {}", response.body);
    }

    #[test]
    fn out_of_range_token_is_rejected_by_the_schema() {
        let response = handle(&json!({
            "drink_type": "coffee",
            "mode": "turbo",
            "cup_type": "my_cup",
        }));
        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("turbo"), "got: {}", response.body);
    }

    #[test]
    fn auto_coffee_passes_without_custom_fields() {
        let response = handle(&json!({
            "drink_type": "coffee",
            "mode": "auto",
            "cup_type": "paper_cup",
        }));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "served auto coffee");
    }

    #[test]
    fn custom_coffee_missing_both_fields_accumulates_both() {
        let order = FlatOrder {
            drink_type: DrinkType::Coffee,
            cup_type: CupType::MyCup,
            mode: Some(Mode::Custom),
            bean: None,
            density: None,
            region: None,
        };
        assert_eq!(
            refine(order),
            Validation::Failure(NonEmptyVec::new(
                ServeError::missing::<Bean>(),
                vec![ServeError::missing::<Density>()],
            )),
        );
    }

    #[test]
    fn the_first_accumulated_violation_becomes_the_body() {
        let response = handle(&json!({
            "drink_type": "coffee",
            "mode": "custom",
            "cup_type": "my_cup",
        }));
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, "bean is required for custom coffee");
    }

    #[test]
    fn full_custom_coffee_is_served() {
        let response = handle(&json!({
            "drink_type": "coffee",
            "mode": "custom",
            "bean": "famous_coffee",
            "density": "high",
            "cup_type": "my_cup",
        }));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "served custom coffee");
    }

    #[test]
    fn green_tea_needs_its_region() {
        let response = handle(&json!({
            "drink_type": "green_tea",
            "cup_type": "paper_cup",
        }));
        assert_eq!(response.body, "region is required for green tea");
    }

    #[test]
    fn refine_builds_the_typed_request() {
        let order = FlatOrder {
            drink_type: DrinkType::GreenTea,
            cup_type: CupType::PaperCup,
            mode: None,
            bean: None,
            density: None,
            region: Some(Region::FamousRegion),
        };
        assert_eq!(
            refine(order),
            Validation::Success(ServeRequest {
                drink: Drink::GreenTea {
                    region: Region::FamousRegion,
                },
                cup_type: CupType::PaperCup,
            }),
        );
    }

    #[test]
    fn extraneous_fields_are_ignored() {
        let response = handle(&json!({
            "drink_type": "coffee",
            "mode": "auto",
            "cup_type": "paper_cup",
            "straw": true,
        }));
        assert_eq!(response.status_code, 200);
    }
}
