use dropcalc::config::CalculatorConfig;
use dropcalc::loader::load_realm_str;
use dropcalc::*;
use std::collections::BTreeMap;

const ABYSS: &str = r#"{
    "realm_name": "Abyss",
    "layers": {
        "layer_1": {
            "small_monsters": {
                "wolf": {
                    "drops": {"weapon_low": "3", "gem": "1N"},
                    "position": "north gate",
                    "currency_cost": {
                        "refine_cost_material": 2,
                        "refine_cost_currency": {"silver": 5}
                    }
                }
            },
            "elite_small_monsters": {
                "alpha_wolf": {
                    "drops": {"weapon_low": "2", "equipment_mid": "7"},
                    "position": "north gate, east ridge",
                    "currency_cost": {
                        "refine_cost_material": 3,
                        "refine_cost_currency": {"silver": 2, "copper": 40}
                    },
                    "16g": true
                }
            },
            "boss": {
                "warden": {
                    "drops": {"gem": "1N", "weapon_low": "5"},
                    "position": "keep"
                }
            }
        },
        "layer_2": {}
    }
}"#;

fn abyss() -> Realm {
    load_realm_str(ABYSS).unwrap()
}

/// Single ordinary monster with a refinement recipe.
#[test]
fn test_single_source_refinement_scenario() {
    let layer = Layer::new().with_monster(
        MonsterCategory::Ordinary,
        "wolf",
        Monster::new("north gate")
            .with_drop("weapon_low", "3")
            .with_currency_cost(CurrencyCost::new(2).with_currency("silver", 5)),
    );
    let realm = Realm::new("Abyss", BTreeMap::new())
        .unwrap()
        .with_layer("layer_1", layer);

    let result = calculate(&realm, "layer_1", "weapon_low", 10).unwrap();

    assert_eq!(result.sources[0].quantity_per_craft, 3);
    assert_eq!(result.unrefined_total_display, "0 groups + 30 units (needs refinement)");
    assert_eq!(result.refined_material_display.as_deref(), Some("0 groups + 15 units"));
    assert_eq!(result.per_refinement_currency_cost_display.as_deref(), Some("silver: 5"));
    assert_eq!(result.total_currency_cost_display.as_deref(), Some("silver: 75"));
}

/// Two refined sources: totals add, no refinement fields.
#[test]
fn test_two_refined_sources_scenario() {
    let result = calculate(&abyss(), "layer_1", "gem", 100).unwrap();

    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.unrefined_total_display, "3 groups + 8 units (no refinement needed)");
    assert!(result.refined_material_display.is_none());
    assert!(result.total_currency_cost_display.is_none());
    assert!(result.per_refinement_currency_cost_display.is_none());
}

/// Three sources across categories, mixed stack flags and summed recipes.
#[test]
fn test_multi_source_aggregation() {
    let result = calculate(&abyss(), "layer_1", "weapon_low", 4).unwrap();

    let breakdown: Vec<(&str, u32)> = result
        .sources
        .iter()
        .map(|s| (s.monster_name.as_str(), s.quantity_per_craft))
        .collect();
    assert_eq!(breakdown, vec![("wolf", 3), ("alpha_wolf", 2), ("warden", 5)]);
    assert_eq!(result.sources[1].position, "north gate, east ridge");

    // 4 * (3 + 2 + 5) = 40 raw, stacked by 16 because alpha_wolf is small-stack
    assert_eq!(result.unrefined_total_display, "2 groups + 8 units (needs refinement)");
    // recipe material 2 + 3 = 5, 40 / 5 = 8 refinements
    assert_eq!(result.refined_material_display.as_deref(), Some("0 groups + 8 units"));
    assert_eq!(
        result.per_refinement_currency_cost_display.as_deref(),
        Some("copper: 40, silver: 7")
    );
    assert_eq!(
        result.total_currency_cost_display.as_deref(),
        Some("copper: 320, silver: 56")
    );
}

/// Integer division drops the leftover raw material.
#[test]
fn test_refine_count_truncates() {
    let result = calculate(&abyss(), "layer_1", "equipment_mid", 1).unwrap();
    // 7 raw / 3 per refinement = 2, one unit left over
    assert_eq!(result.refined_material_display.as_deref(), Some("0 groups + 2 units"));
    assert_eq!(result.total_currency_cost_display.as_deref(), Some("copper: 80, silver: 4"));

    let result = calculate(&abyss(), "layer_1", "equipment_mid", 3).unwrap();
    // 21 raw / 3 = 7
    assert_eq!(result.refined_material_display.as_deref(), Some("0 groups + 7 units"));
}

#[test]
fn test_rejected_requests() {
    let realm = abyss();

    assert_eq!(
        calculate(&realm, "layer_1", "gem", 0),
        Err(CalcError::InvalidQuantity(0))
    );
    assert_eq!(
        calculate(&realm, "layer_1", "gem", -5),
        Err(CalcError::InvalidQuantity(-5))
    );
    assert!(matches!(
        calculate(&realm, "layer_3", "gem", 1),
        Err(CalcError::LayerNotFound { .. })
    ));
    assert!(matches!(
        calculate(&realm, "layer_2", "gem", 1),
        Err(CalcError::NoSource { .. })
    ));
    assert!(matches!(
        calculate(&realm, "layer_1", "badge", 1),
        Err(CalcError::NoSource { .. })
    ));
}

#[test]
fn test_registry_with_classic_labels() {
    let calculator = MaterialCalculator::new([abyss()]).with_labels(Box::new(ClassicLabels));

    let layers = calculator.layers_for_realm("Abyss");
    assert_eq!(layers.values().cloned().collect::<Vec<_>>(), vec!["1c", "2c"]);

    let items: Vec<String> = calculator
        .items_in_layer("Abyss", "layer_1")
        .iter()
        .map(ItemKey::to_string)
        .collect();
    assert_eq!(items, vec!["equipment_mid", "gem", "weapon_low"]);

    let result = calculator.calculate("Abyss", "layer_1", "weapon_low", 4).unwrap();
    assert_eq!(result.item_display_name, "武器 下");
    assert_eq!(result.layer_display_name, "1c");
    assert_eq!(
        result.total_currency_cost_display.as_deref(),
        Some("銅幣: 320, 銀元: 56")
    );

    let gem = calculator.calculate("Abyss", "layer_1", "gem", 1).unwrap();
    assert_eq!(gem.item_display_name, "寶石");
    assert!(gem.unrefined_total_display.ends_with("(不用精煉)"));
}

#[test]
fn test_report_rendering() {
    let result = calculate(&abyss(), "layer_1", "weapon_low", 4).unwrap();
    let report = result.to_string();

    assert!(report.contains("Realm: Abyss"));
    assert!(report.contains("Layer: 1c"));
    assert!(report.contains("Item: weapon low"));
    assert!(report.contains("Monster: alpha_wolf"));
    assert!(report.contains("Refinement cost (total): copper: 320, silver: 56"));
}

#[test]
fn test_result_serializes_to_json() {
    let result = calculate(&abyss(), "layer_1", "gem", 2).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["realm_name"], "Abyss");
    assert_eq!(json["requested_quantity"], 2);
    assert_eq!(json["sources"].as_array().map(Vec::len), Some(2));

    let back: CalculationResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_config_builds_calculator() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("abyss.json"), ABYSS).unwrap();
    let config_path = dir.path().join("dropcalc.toml");
    std::fs::write(&config_path, "realm_files = [\"abyss.json\"]\n").unwrap();

    let config = CalculatorConfig::load(&config_path).unwrap();
    let calculator = config.build().unwrap();

    let result = calculator.calculate("Abyss", "layer_1", "weapon_low", 10).unwrap();
    assert!(result.unrefined_total_display.ends_with("(needs refinement)"));
    assert_eq!(
        calculator.calculate("Dream", "layer_1", "gem", 1),
        Err(CalcError::RealmNotFound("Dream".to_string()))
    );
}

#[test]
fn test_config_missing_realm_file() {
    let config = CalculatorConfig {
        realm_files: vec!["/definitely/not/here.json".into()],
        ..CalculatorConfig::default()
    };
    assert!(matches!(config.build(), Err(CalcError::Io { .. })));
}

#[test]
fn test_bundled_demo_data_loads() {
    let config = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/dropcalc.toml");
    let calculator = MaterialCalculator::from_config_file(config).unwrap();
    assert_eq!(calculator.realm_names(), vec!["Abyss", "Dream"]);

    // 3 * (6 + 12) = 54 raw, (5 + 5) material per refinement
    let result = calculator
        .calculate("Dream", "layer_4", "equipment_premium", 3)
        .unwrap();
    assert_eq!(result.refined_material_display.as_deref(), Some("0 groups + 5 units"));
    assert_eq!(result.total_currency_cost_display.as_deref(), Some("dream_coin: 55"));
}

/// Currency totals beyond 64 bits are rejected instead of clamped.
#[test]
fn test_currency_overflow_is_an_error() {
    let hoard = r#"{
        "realm_name": "Hoard",
        "layers": {
            "layer_1": {
                "boss": {
                    "dragon": {
                        "drops": {"weapon_high": "4000"},
                        "position": "vault",
                        "currency_cost": {
                            "refine_cost_material": 1,
                            "refine_cost_currency": {"silver": 1000000000000}
                        }
                    }
                }
            }
        }
    }"#;
    let realm = load_realm_str(hoard).unwrap();

    assert_eq!(
        calculate(&realm, "layer_1", "weapon_high", 1_000_000_000),
        Err(CalcError::CostOverflow {
            item: "weapon_high".to_string()
        })
    );
    // a small request on the same recipe still succeeds
    let result = calculate(&realm, "layer_1", "weapon_high", 1).unwrap();
    assert_eq!(
        result.total_currency_cost_display.as_deref(),
        Some("silver: 4000000000000000")
    );
}
