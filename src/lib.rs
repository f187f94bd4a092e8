//! # dropcalc - Deterministic Crafting Material Calculator
//!
//! Answers a single question for MMORPG players: to craft N of an item at
//! a given layer of a realm, which monsters must be farmed, how many drops
//! are needed in total, and what does refining the raw drops cost?
//!
//! ## Core Concepts
//!
//! ### Calculation Pipeline
//!
//! ```text
//! [Realm document] → [Layer] → [drop sources] → [CalculationResult]
//! ```
//!
//! 1. **Catalog queries** collect every monster in the layer that drops the item
//! 2. **Drop specs** (`"3"`, `"1N"`) are decoded into quantities and refinement flags
//! 3. **Aggregation** sums quantities, stacks the total and, when the
//!    material needs refinement, derives refinement counts and currency cost
//!
//! Every calculation is a pure function of its inputs: no I/O, no shared
//! mutable state, no caching.
//!
//! ## Example
//!
//! ```rust
//! use dropcalc::*;
//! use std::collections::BTreeMap;
//!
//! let layer = Layer::new()
//!     .with_monster(
//!         MonsterCategory::Ordinary,
//!         "imp",
//!         Monster::new("crypt").with_drop("gem", "1N"),
//!     )
//!     .with_monster(MonsterCategory::Boss, "lich", Monster::new("altar").with_drop("gem", "1N"));
//! let realm = Realm::new("Abyss", BTreeMap::new()).unwrap().with_layer("layer_1", layer);
//!
//! let result = calculate(&realm, "layer_1", "gem", 100).unwrap();
//! assert_eq!(result.sources.len(), 2);
//! assert_eq!(result.unrefined_total_display, "3 groups + 8 units (no refinement needed)");
//! assert!(result.refined_material_display.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Realm, layer, monster and cost records
//! - [`item_key`] - `type[_level]` item identifiers
//! - [`drop_spec`] - Drop spec codec
//! - [`catalog`] - Queries over a layer's monsters
//! - [`stack`] - Stack size convention
//! - [`refinement`] - Refinement cost derivation
//! - [`calculator`] - Calculation engine and realm registry
//! - [`result`] - Calculation results
//! - [`labels`] - Display labels for stored codes
//! - [`loader`] - Realm document loading
//! - [`config`] - Calculator configuration
//! - [`error`] - Error types

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod drop_spec;
pub mod error;
pub mod item_key;
pub mod labels;
pub mod loader;
pub mod model;
pub mod refinement;
pub mod result;
pub mod stack;

// Re-export main types for convenience
pub use calculator::{calculate, calculate_with_labels, MaterialCalculator};
pub use drop_spec::{parse_drop, DropSpec};
pub use error::CalcError;
pub use item_key::ItemKey;
pub use model::{CurrencyCost, Layer, Monster, MonsterCategory, Realm};
pub use result::{CalculationResult, MaterialSource};
pub use stack::{StackCount, StackSize};

// Re-export label providers
pub use labels::{ClassicLabels, CodeLabels, LabelStyle, Labels};
