//! Domain model for realm data.
//!
//! Realms own layers, layers own four categories of monsters, and each
//! monster carries a drop table plus an optional refinement recipe cost.
//! Records are built once from loaded documents and only read afterwards.
//! All maps are ordered so that every traversal is deterministic.

use crate::error::CalcError;
use crate::item_key::ItemKey;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Treat an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Monster groups within a layer.
///
/// Traversal always follows the declared order in [`MonsterCategory::ALL`];
/// that order only affects how sources are listed, never any total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterCategory {
    /// Ordinary monsters (`small_monsters`).
    Ordinary,
    /// Elite ordinary monsters (`elite_small_monsters`).
    EliteOrdinary,
    /// Elite monsters (`elite_monsters`).
    Elite,
    /// Bosses (`boss`).
    Boss,
}

impl MonsterCategory {
    /// All categories in traversal order.
    pub const ALL: [MonsterCategory; 4] = [
        MonsterCategory::Ordinary,
        MonsterCategory::EliteOrdinary,
        MonsterCategory::Elite,
        MonsterCategory::Boss,
    ];

    /// Field name of this category in layer documents.
    pub fn document_key(self) -> &'static str {
        match self {
            MonsterCategory::Ordinary => "small_monsters",
            MonsterCategory::EliteOrdinary => "elite_small_monsters",
            MonsterCategory::Elite => "elite_monsters",
            MonsterCategory::Boss => "boss",
        }
    }
}

impl fmt::Display for MonsterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document_key())
    }
}

/// Cost of one refinement action.
///
/// # Examples
///
/// ```rust
/// use dropcalc::CurrencyCost;
///
/// let cost = CurrencyCost::new(2).with_currency("silver", 5);
/// assert_eq!(cost.refine_cost_material, 2);
/// assert_eq!(cost.refine_cost_currency.get("silver"), Some(&5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyCost {
    /// Raw units consumed per refinement action.
    #[serde(default)]
    pub refine_cost_material: u32,

    /// Currency charged per refinement action, by currency code.
    #[serde(default, deserialize_with = "nullable")]
    pub refine_cost_currency: BTreeMap<String, u64>,
}

impl CurrencyCost {
    /// Create a cost consuming `material` raw units and no currency.
    pub fn new(material: u32) -> Self {
        Self {
            refine_cost_material: material,
            refine_cost_currency: BTreeMap::new(),
        }
    }

    /// Add a currency charge.
    pub fn with_currency(mut self, code: impl Into<String>, amount: u64) -> Self {
        self.refine_cost_currency.insert(code.into(), amount);
        self
    }
}

/// A monster and what it drops.
///
/// # Examples
///
/// ```rust
/// use dropcalc::Monster;
///
/// let wolf = Monster::new("north gate")
///     .with_drop("weapon_low", "3")
///     .with_small_stack(true);
/// assert!(wolf.has_drop("weapon_low"));
/// assert!(wolf.uses_small_stack);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Drop table: item key to encoded drop spec.
    #[serde(default, deserialize_with = "nullable")]
    pub drops: BTreeMap<ItemKey, String>,

    /// Free-text spawn location; may describe several spawn points.
    #[serde(default, deserialize_with = "nullable")]
    pub position: String,

    /// Refinement recipe cost for this monster's raw drops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_cost: Option<CurrencyCost>,

    /// Stack drops in groups of 16 instead of 64.
    #[serde(rename = "16g", default)]
    pub uses_small_stack: bool,
}

impl Monster {
    /// Create a monster found at `position` with an empty drop table.
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            ..Self::default()
        }
    }

    /// Add a drop table entry.
    pub fn with_drop(mut self, item: impl Into<ItemKey>, spec: impl Into<String>) -> Self {
        self.drops.insert(item.into(), spec.into());
        self
    }

    /// Set the refinement recipe cost.
    pub fn with_currency_cost(mut self, cost: CurrencyCost) -> Self {
        self.currency_cost = Some(cost);
        self
    }

    /// Set the small-stack flag.
    pub fn with_small_stack(mut self, small: bool) -> Self {
        self.uses_small_stack = small;
        self
    }

    /// Whether this monster's drop table has an entry for `item`.
    pub fn has_drop(&self, item: &str) -> bool {
        self.drops.contains_key(item)
    }

    /// The raw drop spec string for `item`.
    pub fn drop_spec(&self, item: &str) -> Option<&str> {
        self.drops.get(item).map(String::as_str)
    }
}

/// A sub-zone of a realm with four monster categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(rename = "small_monsters", default, deserialize_with = "nullable")]
    ordinary: BTreeMap<String, Monster>,

    #[serde(rename = "elite_small_monsters", default, deserialize_with = "nullable")]
    elite_ordinary: BTreeMap<String, Monster>,

    #[serde(rename = "elite_monsters", default, deserialize_with = "nullable")]
    elite: BTreeMap<String, Monster>,

    #[serde(rename = "boss", default, deserialize_with = "nullable")]
    boss: BTreeMap<String, Monster>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a monster to a category, replacing any monster with the same id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dropcalc::{Layer, Monster, MonsterCategory};
    ///
    /// let layer = Layer::new()
    ///     .with_monster(MonsterCategory::Boss, "ancient_dragon", Monster::new("summit"));
    /// assert_eq!(layer.monsters(MonsterCategory::Boss).len(), 1);
    /// assert!(layer.monsters(MonsterCategory::Ordinary).is_empty());
    /// ```
    pub fn with_monster(
        mut self,
        category: MonsterCategory,
        id: impl Into<String>,
        monster: Monster,
    ) -> Self {
        self.monsters_mut(category).insert(id.into(), monster);
        self
    }

    /// Monsters of one category, keyed by monster id.
    pub fn monsters(&self, category: MonsterCategory) -> &BTreeMap<String, Monster> {
        match category {
            MonsterCategory::Ordinary => &self.ordinary,
            MonsterCategory::EliteOrdinary => &self.elite_ordinary,
            MonsterCategory::Elite => &self.elite,
            MonsterCategory::Boss => &self.boss,
        }
    }

    fn monsters_mut(&mut self, category: MonsterCategory) -> &mut BTreeMap<String, Monster> {
        match category {
            MonsterCategory::Ordinary => &mut self.ordinary,
            MonsterCategory::EliteOrdinary => &mut self.elite_ordinary,
            MonsterCategory::Elite => &mut self.elite,
            MonsterCategory::Boss => &mut self.boss,
        }
    }

    /// Every monster in traversal order: by category, then by monster id.
    pub fn iter(&self) -> impl Iterator<Item = (MonsterCategory, &str, &Monster)> + '_ {
        MonsterCategory::ALL.into_iter().flat_map(move |category| {
            self.monsters(category)
                .iter()
                .map(move |(id, monster)| (category, id.as_str(), monster))
        })
    }

    /// Total number of monsters across all categories.
    pub fn monster_count(&self) -> usize {
        MonsterCategory::ALL
            .iter()
            .map(|&category| self.monsters(category).len())
            .sum()
    }
}

/// Document shape of a realm, validated into [`Realm`].
#[derive(Deserialize)]
struct RealmDocument {
    realm_name: String,
    #[serde(default, deserialize_with = "nullable")]
    layers: BTreeMap<String, Layer>,
}

/// A game world containing layers.
///
/// The name is guaranteed non-blank.
///
/// # Examples
///
/// ```rust
/// use dropcalc::{CalcError, Realm};
/// use std::collections::BTreeMap;
///
/// let realm = Realm::new("Abyss", BTreeMap::new()).unwrap();
/// assert_eq!(realm.name(), "Abyss");
///
/// assert_eq!(Realm::new("  ", BTreeMap::new()), Err(CalcError::EmptyRealmName));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Realm {
    #[serde(rename = "realm_name")]
    name: String,
    layers: BTreeMap<String, Layer>,
}

impl<'de> Deserialize<'de> for Realm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = RealmDocument::deserialize(deserializer)?;
        Realm::new(doc.realm_name, doc.layers).map_err(serde::de::Error::custom)
    }
}

impl Realm {
    /// Create a realm.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::EmptyRealmName` if `name` is empty or whitespace.
    pub fn new(
        name: impl Into<String>,
        layers: BTreeMap<String, Layer>,
    ) -> Result<Self, CalcError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CalcError::EmptyRealmName);
        }
        Ok(Self { name, layers })
    }

    /// Add a layer, replacing any layer with the same id.
    pub fn with_layer(mut self, id: impl Into<String>, layer: Layer) -> Self {
        self.layers.insert(id.into(), layer);
        self
    }

    /// The realm's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All layers keyed by layer id.
    pub fn layers(&self) -> &BTreeMap<String, Layer> {
        &self.layers
    }

    /// Look up a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.get(id)
    }
}
