//! Serve actions
//!
//! The side-effecting step performed only after a request has passed all
//! validation. The "hardware" here is a `tracing::info!` line describing the
//! pour; the returned confirmation body is the functional part of the
//! contract. All four handlers funnel into these three actions, so the
//! confirmation text cannot drift between validation techniques.

use tracing::info;

use crate::model::{Bean, CupType, Density, Drink, Region, ServeMode, ServeRequest};

/// Confirmation body for an auto-mode coffee.
pub const SERVED_AUTO_COFFEE: &str = "served auto coffee";
/// Confirmation body for a custom-mode coffee.
pub const SERVED_CUSTOM_COFFEE: &str = "served custom coffee";
/// Confirmation body for a green tea.
pub const SERVED_GREEN_TEA: &str = "served green tea";

/// Pour an auto-mode coffee.
pub fn auto_coffee(cup_type: CupType) -> &'static str {
    info!("Serving auto coffee in {}", cup_type);
    SERVED_AUTO_COFFEE
}

/// Pour a custom-mode coffee with the requested bean and density.
pub fn custom_coffee(bean: Bean, density: Density, cup_type: CupType) -> &'static str {
    info!(
        "Serving custom coffee with {} bean at {} density in {}",
        bean, density, cup_type,
    );
    SERVED_CUSTOM_COFFEE
}

/// Pour a green tea from the requested region.
pub fn green_tea(region: Region, cup_type: CupType) -> &'static str {
    info!("Serving green tea from {} in {}", region, cup_type);
    SERVED_GREEN_TEA
}

/// Dispatch a validated request to its serve action
///
/// The match is exhaustive over the drink grammar, so every validated request
/// has exactly one serve path.
pub fn serve(request: &ServeRequest) -> &'static str {
    match request.drink {
        Drink::Coffee {
            serve_mode: ServeMode::Auto,
        } => auto_coffee(request.cup_type),
        Drink::Coffee {
            serve_mode: ServeMode::Custom { bean, density },
        } => custom_coffee(bean, density, request.cup_type),
        Drink::GreenTea { region } => green_tea(region, request.cup_type),
    }
}
