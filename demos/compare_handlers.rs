//! Run the canonical orders through all four handlers and print the results.
//!
//! ```sh
//! cargo run --example compare_handlers
//! ```
//!
//! The serve traces appear interleaved with the responses, courtesy of the
//! fmt subscriber installed below.

use serde_json::{json, Value};

use pourover::handler::{capability, naive, schema, tagged};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let flat_orders: Vec<(&str, Value)> = vec![
        (
            "auto coffee",
            json!({ "drink_type": "coffee", "mode": "auto", "cup_type": "paper_cup" }),
        ),
        (
            "custom coffee",
            json!({
                "drink_type": "coffee",
                "mode": "custom",
                "bean": "famous_coffee",
                "density": "high",
                "cup_type": "my_cup",
            }),
        ),
        (
            "green tea",
            json!({ "drink_type": "green_tea", "region": "famous_region", "cup_type": "paper_cup" }),
        ),
        (
            "invalid: no cup",
            json!({ "drink_type": "coffee", "mode": "auto" }),
        ),
    ];

    println!("== naive handler (manual checks) ==");
    for (label, payload) in &flat_orders {
        println!("{label}: {}", naive::handle(payload));
    }

    println!("\n== schema handler (flat schema + cross-field pass) ==");
    for (label, payload) in &flat_orders {
        println!("{label}: {}", schema::handle(payload));
    }

    let nested_orders: Vec<(&str, Value)> = vec![
        (
            "auto coffee",
            json!({
                "drink": { "drink_type": "coffee", "serve_mode": { "mode": "auto" } },
                "cup_type": "paper_cup",
            }),
        ),
        (
            "custom coffee",
            json!({
                "drink": {
                    "drink_type": "coffee",
                    "serve_mode": { "mode": "custom", "bean": "famous_coffee", "density": "high" },
                },
                "cup_type": "my_cup",
            }),
        ),
        (
            "green tea",
            json!({
                "drink": { "drink_type": "green_tea", "region": "famous_region" },
                "cup_type": "paper_cup",
            }),
        ),
    ];

    println!("\n== tagged handler (discriminated unions) ==");
    for (label, payload) in &nested_orders {
        println!("{label}: {}", tagged::handle(payload));
    }

    println!("\n== capability handler (trait dispatch) ==");
    for (label, payload) in &nested_orders {
        let mut shaped = payload.clone();
        if let Some(map) = shaped.as_object_mut() {
            if let Some(drink) = map.remove("drink") {
                map.insert("drink_server".to_string(), drink);
            }
        }
        println!("{label}: {}", capability::handle(&shaped));
    }
}
