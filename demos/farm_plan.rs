//! Farm plan example: load realms from a config file and print reports
//!
//! This example demonstrates:
//! - Building a calculator from `demos/dropcalc.toml`
//! - Browsing realms, layers and items
//! - Running calculations and rendering the text report
//!
//! Run with `RUST_LOG=dropcalc=debug` to see the engine's trace.

use dropcalc::catalog::{item_types, levels_for_type};
use dropcalc::*;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dropcalc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), CalcError> {
    init_logger();

    let config = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/dropcalc.toml");
    let calculator = MaterialCalculator::from_config_file(&config)?;

    // Browse what is available
    println!("=== Catalog ===");
    for realm_name in calculator.realm_names() {
        println!("{}", realm_name);
        for (layer_id, display) in calculator.layers_for_realm(realm_name) {
            println!("  {} ({})", display, layer_id);
            if let Some(layer) = calculator.realm(realm_name).and_then(|r| r.layer(&layer_id)) {
                for type_code in item_types(layer) {
                    let levels = levels_for_type(layer, &type_code);
                    if levels.is_empty() {
                        println!("    {}", type_code);
                    } else {
                        println!("    {}: {}", type_code, levels.join(", "));
                    }
                }
            }
        }
    }

    // Raw drops that need refinement
    println!();
    let result = calculator.calculate("Abyss", "layer_1", "weapon_low", 10)?;
    println!("{}", result);

    // Already refined drops
    let result = calculator.calculate("Abyss", "layer_1", "gem", 100)?;
    println!("{}", result);

    // Same request with the game's own labels
    let classic =
        MaterialCalculator::from_config_file(&config)?.with_labels(Box::new(ClassicLabels));
    let result = classic.calculate("Dream", "layer_4", "equipment_premium", 3)?;
    println!("{}", result);

    // Rejected requests surface as errors
    match calculator.calculate("Abyss", "layer_2", "gem", 1) {
        Ok(_) => println!("unexpected result"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
