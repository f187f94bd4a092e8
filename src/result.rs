//! Calculation results module.
//!
//! Contains the `CalculationResult` type, the fully resolved answer to a
//! material request, together with its per-monster breakdown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One contributing monster in a calculation breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSource {
    /// Monster id from the layer document.
    pub monster_name: String,
    /// Free-text spawn location.
    pub position: String,
    /// Units this monster's drop contributes per crafted item.
    pub quantity_per_craft: u32,
}

impl MaterialSource {
    /// Create a new breakdown entry.
    pub fn new(
        monster_name: impl Into<String>,
        position: impl Into<String>,
        quantity_per_craft: u32,
    ) -> Self {
        Self {
            monster_name: monster_name.into(),
            position: position.into(),
            quantity_per_craft,
        }
    }
}

/// The resolved answer to "what do I farm to craft N of this item".
///
/// This is read-only and built fresh by every calculation. Display fields
/// are pre-rendered; the refinement fields are present only when the
/// aggregated drop needs refinement and a recipe cost is defined.
///
/// Its `Display` implementation renders a plain-text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Name of the realm.
    pub realm_name: String,
    /// Display name of the layer, e.g. `3c`.
    pub layer_display_name: String,
    /// Display name of the item.
    pub item_display_name: String,
    /// Number of items to craft.
    pub requested_quantity: u64,
    /// Contributing monsters in traversal order.
    pub sources: Vec<MaterialSource>,
    /// Raw material total as stacks, with a refinement marker.
    pub unrefined_total_display: String,
    /// Number of refinement actions as stacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refined_material_display: Option<String>,
    /// Currency charged by all refinement actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_currency_cost_display: Option<String>,
    /// Currency charged by one refinement action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_refinement_currency_cost_display: Option<String>,
}

impl CalculationResult {
    /// Whether refinement figures are present.
    pub fn has_refinement(&self) -> bool {
        self.refined_material_display.is_some()
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Calculation Result =====")?;
        writeln!(f, "Realm: {}", self.realm_name)?;
        writeln!(f, "Layer: {}", self.layer_display_name)?;
        writeln!(f, "Item: {}", self.item_display_name)?;
        writeln!(f, "Quantity: {}", self.requested_quantity)?;
        writeln!(f)?;

        writeln!(f, "----- Material Sources -----")?;
        for source in &self.sources {
            writeln!(f, "Monster: {}", source.monster_name)?;
            writeln!(f, "Position: {}", source.position)?;
            writeln!(f, "Per craft: {}", source.quantity_per_craft)?;
            if let Some(per_refinement) = &self.per_refinement_currency_cost_display {
                writeln!(f, "Refinement cost (each): {}", per_refinement)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "----- Total Materials -----")?;
        writeln!(f, "Unrefined material: {}", self.unrefined_total_display)?;
        if let Some(refined) = &self.refined_material_display {
            writeln!(f, "Refinements: {}", refined)?;
        }
        if let Some(total) = &self.total_currency_cost_display {
            writeln!(f, "Refinement cost (total): {}", total)?;
        }
        Ok(())
    }
}
