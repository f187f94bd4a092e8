//! Read-only queries over a layer's monsters.
//!
//! All queries traverse the four monster categories in
//! [`MonsterCategory::ALL`] order and never fail; an unmatched query
//! simply yields an empty collection.

use crate::item_key::ItemKey;
use crate::labels::{LEVEL_ORDER, TIERED_TYPES};
use crate::model::{Layer, Monster, MonsterCategory};
use std::collections::BTreeSet;

/// A monster that drops a requested item, borrowed from its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRef<'a> {
    /// Category the monster belongs to.
    pub category: MonsterCategory,
    /// Monster id within its category.
    pub monster_id: &'a str,
    /// The monster record.
    pub monster: &'a Monster,
}

/// Every distinct item key dropped anywhere in the layer.
///
/// # Examples
///
/// ```rust
/// use dropcalc::{Layer, Monster, MonsterCategory};
/// use dropcalc::catalog::list_item_keys;
///
/// let layer = Layer::new()
///     .with_monster(
///         MonsterCategory::Ordinary,
///         "rat",
///         Monster::new("sewer").with_drop("gem", "1N"),
///     )
///     .with_monster(MonsterCategory::Boss, "king", Monster::new("throne").with_drop("gem", "5N"));
///
/// let keys = list_item_keys(&layer);
/// assert_eq!(keys.len(), 1);
/// ```
pub fn list_item_keys(layer: &Layer) -> BTreeSet<ItemKey> {
    layer
        .iter()
        .flat_map(|(_, _, monster)| monster.drops.keys().cloned())
        .collect()
}

/// Every monster whose drop table contains `item`, in traversal order.
pub fn find_sources<'a>(layer: &'a Layer, item: &str) -> Vec<SourceRef<'a>> {
    layer
        .iter()
        .filter(|(_, _, monster)| monster.has_drop(item))
        .map(|(category, monster_id, monster)| SourceRef {
            category,
            monster_id,
            monster,
        })
        .collect()
}

/// Distinct item type codes dropped in the layer.
pub fn item_types(layer: &Layer) -> BTreeSet<String> {
    list_item_keys(layer)
        .iter()
        .map(|key| key.type_code().to_string())
        .collect()
}

/// Level codes present in the layer for one item type.
///
/// For [`TIERED_TYPES`] the known tiers come first in [`LEVEL_ORDER`] and
/// any other levels follow alphabetically. Other types list their levels
/// alphabetically. Bare type keys contribute no level.
///
/// # Examples
///
/// ```rust
/// use dropcalc::{Layer, Monster, MonsterCategory};
/// use dropcalc::catalog::levels_for_type;
///
/// let smith = Monster::new("forge")
///     .with_drop("weapon_high", "2")
///     .with_drop("weapon_low", "4")
///     .with_drop("weapon_cursed", "1")
///     .with_drop("necklace_low", "1")
///     .with_drop("necklace_high", "1");
/// let layer = Layer::new().with_monster(MonsterCategory::Elite, "smith", smith);
///
/// assert_eq!(levels_for_type(&layer, "weapon"), vec!["low", "high", "cursed"]);
/// assert_eq!(levels_for_type(&layer, "necklace"), vec!["high", "low"]);
/// ```
pub fn levels_for_type(layer: &Layer, type_code: &str) -> Vec<String> {
    let keys = list_item_keys(layer);
    let mut levels: Vec<String> = Vec::new();

    if TIERED_TYPES.contains(&type_code) {
        levels.extend(
            LEVEL_ORDER
                .iter()
                .filter(|level| keys.contains(&ItemKey::compose(type_code, level)))
                .map(|level| level.to_string()),
        );
    }

    let remaining: BTreeSet<String> = keys
        .iter()
        .filter(|key| key.type_code() == type_code)
        .filter_map(|key| key.level_code())
        .filter(|level| !levels.iter().any(|known| known == level))
        .map(str::to_string)
        .collect();
    levels.extend(remaining);
    levels
}
