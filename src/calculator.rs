//! Material calculation engine.
//!
//! Provides [`calculate`], which turns a (realm, layer, item, quantity)
//! request into a [`CalculationResult`], and [`MaterialCalculator`], a
//! registry of loaded realms that front ends drive.

use crate::catalog::{self, SourceRef};
use crate::drop_spec::{parse_drop, DropSpec};
use crate::error::CalcError;
use crate::item_key::ItemKey;
use crate::labels::{item_display_name, layer_display_name, CodeLabels, Labels};
use crate::model::Realm;
use crate::refinement::{PlanIssue, RefinementCost};
use crate::result::{CalculationResult, MaterialSource};
use crate::stack::{StackCount, StackSize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Calculate what to farm for `quantity` crafts of `item` in one layer.
///
/// Display fields show codes as stored; use [`calculate_with_labels`] for
/// translated output.
///
/// # Errors
///
/// * `InvalidQuantity` - `quantity` is zero or negative
/// * `LayerNotFound` - `layer_id` is not a layer of `realm`
/// * `NoSource` - no monster in the layer drops `item`
/// * `InvalidDropSpec` - a contributing drop spec is malformed
/// * `QuantityOverflow` - the raw total does not fit in `u64`
/// * `ZeroRefineMaterial` - the recipe charges currency but consumes nothing
/// * `CostOverflow` - a summed recipe cost or currency total does not fit in `u64`
///
/// # Examples
///
/// ```rust
/// use dropcalc::*;
/// use std::collections::BTreeMap;
///
/// let wolf = Monster::new("north gate")
///     .with_drop("weapon_low", "3")
///     .with_currency_cost(CurrencyCost::new(2).with_currency("silver", 5));
/// let realm = Realm::new("Abyss", BTreeMap::new())
///     .unwrap()
///     .with_layer("layer_1", Layer::new().with_monster(MonsterCategory::Ordinary, "wolf", wolf));
///
/// let result = calculate(&realm, "layer_1", "weapon_low", 10).unwrap();
/// assert_eq!(result.unrefined_total_display, "0 groups + 30 units (needs refinement)");
/// assert_eq!(result.total_currency_cost_display.as_deref(), Some("silver: 75"));
/// ```
pub fn calculate(
    realm: &Realm,
    layer_id: &str,
    item: &str,
    quantity: i64,
) -> Result<CalculationResult, CalcError> {
    calculate_with_labels(realm, layer_id, item, quantity, &CodeLabels)
}

/// Same as [`calculate`], rendering display fields through `labels`.
pub fn calculate_with_labels(
    realm: &Realm,
    layer_id: &str,
    item: &str,
    quantity: i64,
    labels: &dyn Labels,
) -> Result<CalculationResult, CalcError> {
    let quantity = match u64::try_from(quantity) {
        Ok(q) if q > 0 => q,
        _ => return Err(CalcError::InvalidQuantity(quantity)),
    };

    let layer = realm.layer(layer_id).ok_or_else(|| CalcError::LayerNotFound {
        realm: realm.name().to_string(),
        layer: layer_id.to_string(),
    })?;

    let sources = catalog::find_sources(layer, item);
    if sources.is_empty() {
        return Err(CalcError::NoSource {
            layer: layer_id.to_string(),
            item: item.to_string(),
        });
    }

    let drops = decode_drops(&sources, item)?;
    let per_craft_total: u64 = drops.iter().map(|d| u64::from(d.quantity)).sum();
    let needs_refinement = drops.iter().any(|d| d.needs_refinement);

    let total_unrefined = quantity
        .checked_mul(per_craft_total)
        .ok_or(CalcError::QuantityOverflow {
            quantity,
            per_craft: per_craft_total,
        })?;
    let stack_size = StackSize::for_flags(sources.iter().map(|s| s.monster.uses_small_stack));
    let unrefined_stack = StackCount::decompose(total_unrefined, stack_size);

    debug!(
        realm = realm.name(),
        layer = layer_id,
        item,
        quantity,
        sources = sources.len(),
        per_craft_total,
        total_unrefined,
        needs_refinement,
        "aggregated drop sources"
    );

    let key = ItemKey::from_str(item);
    let marker = if needs_refinement {
        labels.needs_refinement()
    } else {
        labels.no_refinement()
    };

    let mut result = CalculationResult {
        realm_name: realm.name().to_string(),
        layer_display_name: layer_display_name(layer_id),
        item_display_name: item_display_name(labels, key.type_code(), key.level_code()),
        requested_quantity: quantity,
        sources: sources
            .iter()
            .zip(&drops)
            .map(|(source, drop)| {
                MaterialSource::new(
                    source.monster_id,
                    source.monster.position.as_str(),
                    drop.quantity,
                )
            })
            .collect(),
        unrefined_total_display: format!("{} ({})", unrefined_stack, marker),
        refined_material_display: None,
        total_currency_cost_display: None,
        per_refinement_currency_cost_display: None,
    };

    if needs_refinement {
        apply_refinement(&mut result, &sources, total_unrefined, stack_size, item, labels)?;
    }

    Ok(result)
}

/// Decode each source's drop spec for `item`, in source order.
fn decode_drops(sources: &[SourceRef<'_>], item: &str) -> Result<Vec<DropSpec>, CalcError> {
    sources
        .iter()
        .map(|source| {
            // find_sources only yields monsters with an entry for `item`
            let spec = source.monster.drop_spec(item).unwrap_or_default();
            parse_drop(spec).map_err(|e| {
                warn!(
                    monster = source.monster_id,
                    category = %source.category,
                    item,
                    "malformed drop spec"
                );
                e
            })
        })
        .collect()
}

/// Fill in the refinement fields of `result`.
fn apply_refinement(
    result: &mut CalculationResult,
    sources: &[SourceRef<'_>],
    total_unrefined: u64,
    stack_size: StackSize,
    item: &str,
    labels: &dyn Labels,
) -> Result<(), CalcError> {
    let overflow = || {
        warn!(item, "refinement cost overflows");
        CalcError::CostOverflow {
            item: item.to_string(),
        }
    };
    let cost = RefinementCost::aggregate(sources).map_err(|_| overflow())?;
    let plan = match cost.plan(total_unrefined, stack_size) {
        Ok(plan) => plan,
        Err(PlanIssue::Unspecified) => {
            debug!(item, "no refinement recipe cost defined");
            return Ok(());
        }
        Err(PlanIssue::ZeroMaterial) => {
            warn!(item, "refinement recipe charges currency but consumes no material");
            return Err(CalcError::ZeroRefineMaterial {
                item: item.to_string(),
            });
        }
        Err(PlanIssue::Overflow) => return Err(overflow()),
    };

    debug!(
        item,
        refine_count = plan.refine_count,
        material_per_refinement = cost.material,
        leftover = total_unrefined % cost.material,
        "derived refinement plan"
    );

    result.refined_material_display = Some(plan.refined_stack.to_string());
    result.per_refinement_currency_cost_display =
        Some(format_currency(&plan.per_refinement_currency, labels));
    result.total_currency_cost_display = Some(format_currency(&plan.total_currency, labels));
    Ok(())
}

/// Render `code: amount` pairs joined by `", "`.
fn format_currency(amounts: &[(String, u64)], labels: &dyn Labels) -> String {
    amounts
        .iter()
        .map(|(code, amount)| format!("{}: {}", labels.currency(code), amount))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Registry of loaded realms, keyed by realm name.
///
/// # Examples
///
/// ```rust
/// use dropcalc::*;
/// use std::collections::BTreeMap;
///
/// let realm = Realm::new("Dream", BTreeMap::new())
///     .unwrap()
///     .with_layer("layer_2", Layer::new());
/// let calculator = MaterialCalculator::new([realm]);
///
/// assert_eq!(calculator.realm_names(), vec!["Dream"]);
/// assert_eq!(calculator.layers_for_realm("Dream").get("layer_2").map(String::as_str), Some("2c"));
/// ```
pub struct MaterialCalculator {
    realms: BTreeMap<String, Realm>,
    labels: Box<dyn Labels>,
}

impl MaterialCalculator {
    /// Create a calculator over `realms` showing codes as stored.
    ///
    /// A later realm with the same name replaces an earlier one.
    pub fn new(realms: impl IntoIterator<Item = Realm>) -> Self {
        let mut calculator = Self {
            realms: BTreeMap::new(),
            labels: Box::new(CodeLabels),
        };
        for realm in realms {
            calculator.insert_realm(realm);
        }
        calculator
    }

    /// Replace the label provider.
    pub fn with_labels(mut self, labels: Box<dyn Labels>) -> Self {
        self.labels = labels;
        self
    }

    /// Register a realm, replacing any realm with the same name.
    pub fn insert_realm(&mut self, realm: Realm) {
        if self.realms.contains_key(realm.name()) {
            warn!(realm = realm.name(), "replacing previously loaded realm");
        }
        self.realms.insert(realm.name().to_string(), realm);
    }

    /// Names of all registered realms.
    pub fn realm_names(&self) -> Vec<&str> {
        self.realms.keys().map(String::as_str).collect()
    }

    /// Look up a realm by name.
    pub fn realm(&self, name: &str) -> Option<&Realm> {
        self.realms.get(name)
    }

    /// Layer ids of a realm mapped to their display names.
    ///
    /// Empty for an unknown realm.
    pub fn layers_for_realm(&self, realm_name: &str) -> BTreeMap<String, String> {
        self.realm(realm_name)
            .map(|realm| {
                realm
                    .layers()
                    .keys()
                    .map(|id| (id.clone(), layer_display_name(id)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Item keys dropped in a layer. Empty for an unknown realm or layer.
    pub fn items_in_layer(&self, realm_name: &str, layer_id: &str) -> BTreeSet<ItemKey> {
        self.realm(realm_name)
            .and_then(|realm| realm.layer(layer_id))
            .map(catalog::list_item_keys)
            .unwrap_or_default()
    }

    /// Run [`calculate_with_labels`] against a registered realm.
    ///
    /// # Errors
    ///
    /// `RealmNotFound` for an unknown realm, otherwise as [`calculate`].
    pub fn calculate(
        &self,
        realm_name: &str,
        layer_id: &str,
        item: &str,
        quantity: i64,
    ) -> Result<CalculationResult, CalcError> {
        let realm = self
            .realm(realm_name)
            .ok_or_else(|| CalcError::RealmNotFound(realm_name.to_string()))?;
        calculate_with_labels(realm, layer_id, item, quantity, self.labels.as_ref())
    }
}

impl Default for MaterialCalculator {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
