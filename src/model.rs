//! Domain model for drink orders
//!
//! Every field of an order draws its value from a closed set of wire tokens,
//! and the order itself is a pair of discriminated unions: `drink_type`
//! selects the drink variant, and within coffee, `mode` selects the serve
//! mode. Exhaustive `match` over these types is what lets the handlers skip
//! the "unexpected branch" escape hatch entirely.
//!
//! # Examples
//!
//! ```
//! use pourover::model::{ClosedSet, CupType};
//!
//! assert_eq!(CupType::from_token("paper_cup"), Some(CupType::PaperCup));
//! assert_eq!(CupType::from_token("mug"), None);
//! assert_eq!(CupType::ALLOWED, &["paper_cup", "my_cup"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field whose values form a fixed, enumerable set of wire tokens
///
/// Implemented by every flat order field. The token list backs both the
/// naive handler's membership checks and the `InvalidEnum` error text, so
/// there is a single source of truth shared with the serde derives.
pub trait ClosedSet: Sized + Copy {
    /// The payload key this set is read from.
    const FIELD: &'static str;

    /// Every token accepted on the wire, in declaration order.
    const ALLOWED: &'static [&'static str];

    /// The context that makes this field required, if it is conditional
    /// (e.g. `bean` is only required for custom coffee).
    const REQUIRED_FOR: Option<&'static str> = None;

    /// Parse a wire token, `None` if it falls outside the set.
    fn from_token(token: &str) -> Option<Self>;

    /// The wire token for this value.
    fn as_token(self) -> &'static str;
}

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal $(, required for $ctx:literal)?) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl ClosedSet for $name {
            const FIELD: &'static str = $field;
            const ALLOWED: &'static [&'static str] = &[$($token),+];
            $( const REQUIRED_FOR: Option<&'static str> = Some($ctx); )?

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn as_token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_token())
            }
        }
    };
}

closed_set! {
    /// Which drink is being ordered (the top-level discriminator).
    DrinkType ("drink_type") {
        /// Coffee, further configured by a serve mode.
        Coffee => "coffee",
        /// Green tea, configured by a growing region.
        GreenTea => "green_tea",
    }
}

closed_set! {
    /// Cup the drink is served in.
    CupType ("cup_type") {
        /// Single-use paper cup.
        PaperCup => "paper_cup",
        /// Customer-supplied reusable cup.
        MyCup => "my_cup",
    }
}

closed_set! {
    /// How a coffee is brewed (the second-level discriminator).
    Mode ("mode", required for "coffee") {
        /// Machine defaults, no further fields.
        Auto => "auto",
        /// Caller picks the bean and density.
        Custom => "custom",
    }
}

closed_set! {
    /// Bean used for a custom coffee.
    Bean ("bean", required for "custom coffee") {
        /// The house's signature bean.
        FamousCoffee => "famous_coffee",
        /// Anything else in the hopper.
        OtherCoffee => "other_coffee",
    }
}

closed_set! {
    /// Brew density for a custom coffee.
    Density ("density", required for "custom coffee") {
        /// Strong.
        High => "high",
        /// Medium.
        Mid => "mid",
        /// Weak.
        Low => "low",
    }
}

closed_set! {
    /// Growing region for a green tea.
    Region ("region", required for "green tea") {
        /// The well-known growing region.
        FamousRegion => "famous_region",
        /// Any other region.
        OtherRegion => "other_region",
    }
}

/// How a coffee is brewed, discriminated by the `mode` field
///
/// # Examples
///
/// ```
/// use pourover::model::ServeMode;
///
/// let mode: ServeMode = serde_json::from_value(serde_json::json!({
///     "mode": "auto",
/// })).unwrap();
/// assert_eq!(mode, ServeMode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ServeMode {
    /// Machine defaults.
    Auto,
    /// Caller-specified brew.
    Custom {
        /// Bean to grind.
        bean: Bean,
        /// Brew strength.
        density: Density,
    },
}

/// A drink order, discriminated by the `drink_type` field
///
/// Once a payload deserializes into this type, every mode-dependent field is
/// known to be present and in range; no handler re-validates past this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "drink_type", rename_all = "snake_case")]
pub enum Drink {
    /// A coffee with its serve mode.
    Coffee {
        /// Auto or custom brew settings.
        serve_mode: ServeMode,
    },
    /// A green tea with its region.
    GreenTea {
        /// Where the leaves were grown.
        region: Region,
    },
}

/// A fully validated serve request: what to pour and into which cup
///
/// # Examples
///
/// ```
/// use pourover::model::{CupType, Drink, Region, ServeRequest};
///
/// let request: ServeRequest = serde_json::from_value(serde_json::json!({
///     "drink": { "drink_type": "green_tea", "region": "famous_region" },
///     "cup_type": "paper_cup",
/// })).unwrap();
///
/// assert_eq!(request.drink, Drink::GreenTea { region: Region::FamousRegion });
/// assert_eq!(request.cup_type, CupType::PaperCup);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeRequest {
    /// The drink variant with its mode-dependent fields.
    pub drink: Drink,
    /// Cup the drink goes into.
    pub cup_type: CupType,
}
