//! Variant 4: capability dispatch
//!
//! The tagged model again, but each drink variant now carries its own serve
//! behavior behind the [`DrinkServer`] trait. The wire enum's tag is
//! inspected exactly once, when [`AnyDrinkServer::as_server`] resolves the
//! validated variant to a trait object; from there [`serve_drink`] calls the
//! shared `serve(cup_type)` capability without knowing which drink it holds.
//! This trades the second level of conditional branching for closed-set
//! polymorphic dispatch.
//!
//! # Examples
//!
//! ```
//! use pourover::handler::capability;
//!
//! let response = capability::handle(&serde_json::json!({
//!     "drink_server": { "drink_type": "green_tea", "region": "famous_region" },
//!     "cup_type": "paper_cup",
//! }));
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, "served green tea");
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::model::{CupType, Region, ServeMode};
use crate::response::ServeResponse;
use crate::serve;

/// The serve capability shared by every drink variant
///
/// Implementations perform the pour and return the fixed confirmation body
/// for their path.
pub trait DrinkServer {
    /// Serve this drink into the given cup.
    fn serve(&self, cup_type: CupType) -> &'static str;
}

/// A coffee that knows how to serve itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CoffeeServer {
    /// Auto or custom brew settings.
    pub serve_mode: ServeMode,
}

impl DrinkServer for CoffeeServer {
    fn serve(&self, cup_type: CupType) -> &'static str {
        match self.serve_mode {
            ServeMode::Auto => serve::auto_coffee(cup_type),
            ServeMode::Custom { bean, density } => serve::custom_coffee(bean, density, cup_type),
        }
    }
}

/// A green tea that knows how to serve itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GreenTeaServer {
    /// Where the leaves were grown.
    pub region: Region,
}

impl DrinkServer for GreenTeaServer {
    fn serve(&self, cup_type: CupType) -> &'static str {
        serve::green_tea(self.region, cup_type)
    }
}

/// The wire-level drink server, discriminated by `drink_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "drink_type", rename_all = "snake_case")]
pub enum AnyDrinkServer {
    /// A coffee server.
    Coffee(CoffeeServer),
    /// A green tea server.
    GreenTea(GreenTeaServer),
}

impl AnyDrinkServer {
    /// Resolve the validated variant to its serve capability
    ///
    /// The tag is matched here once; everything downstream sees only the
    /// trait.
    pub fn as_server(&self) -> &dyn DrinkServer {
        match self {
            AnyDrinkServer::Coffee(coffee) => coffee,
            AnyDrinkServer::GreenTea(tea) => tea,
        }
    }
}

/// A validated request carrying a serve capability and a cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CapabilityRequest {
    /// The drink, behind its serve capability.
    pub drink_server: AnyDrinkServer,
    /// Cup to serve into.
    pub cup_type: CupType,
}

/// Dispatch through the capability, never re-inspecting the variant tag.
pub fn serve_drink(server: &dyn DrinkServer, cup_type: CupType) -> &'static str {
    server.serve(cup_type)
}

/// Deserialize the request and dispatch through [`serve_drink`].
pub fn handle(payload: &Value) -> ServeResponse {
    match CapabilityRequest::deserialize(payload) {
        Ok(request) => {
            ServeResponse::ok(serve_drink(request.drink_server.as_server(), request.cup_type))
        }
        Err(err) => ServeResponse::client_error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bean, Density};
    use serde_json::json;

    #[test]
    fn auto_coffee_dispatches_through_the_trait() {
        let response = handle(&json!({
            "drink_server": { "drink_type": "coffee", "serve_mode": { "mode": "auto" } },
            "cup_type": "paper_cup",
        }));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "served auto coffee");
    }

    #[test]
    fn custom_coffee_dispatches_through_the_trait() {
        let response = handle(&json!({
            "drink_server": {
                "drink_type": "coffee",
                "serve_mode": { "mode": "custom", "bean": "famous_coffee", "density": "high" },
            },
            "cup_type": "my_cup",
        }));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "served custom coffee");
    }

    #[test]
    fn green_tea_dispatches_through_the_trait() {
        let response = handle(&json!({
            "drink_server": { "drink_type": "green_tea", "region": "other_region" },
            "cup_type": "paper_cup",
        }));
        assert_eq!(response.body, "served green tea");
    }

    #[test]
    fn serve_drink_works_on_any_trait_object() {
        let coffee = CoffeeServer {
            serve_mode: ServeMode::Custom {
                bean: Bean::OtherCoffee,
                density: Density::Mid,
            },
        };
        assert_eq!(
            serve_drink(&coffee, CupType::MyCup),
            serve::SERVED_CUSTOM_COFFEE,
        );

        let tea = GreenTeaServer {
            region: Region::FamousRegion,
        };
        assert_eq!(
            serve_drink(&tea, CupType::PaperCup),
            serve::SERVED_GREEN_TEA,
        );
    }

    #[test]
    fn missing_drink_server_names_the_field() {
        let response = handle(&json!({ "cup_type": "paper_cup" }));
        assert_eq!(response.status_code, 400);
        assert!(
            response.body.contains("drink_server"),
            "got: {}",
            response.body,
        );
    }

    #[test]
    fn unknown_tag_is_a_client_error() {
        let response = handle(&json!({
            "drink_server": { "drink_type": "cocoa" },
            "cup_type": "paper_cup",
        }));
        assert_eq!(response.status_code, 400);
        assert!(response.body.contains("cocoa"), "got: {}", response.body);
    }
}
