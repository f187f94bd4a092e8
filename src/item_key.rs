//! Item key module.
//!
//! Provides the `ItemKey` type, the `type` or `type_level` identifier used
//! as a key in monster drop tables. Uses `Arc<str>` so keys collected from
//! many drop tables share their allocation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Identifier of a craftable item variant, e.g. `weapon_low` or `gem`.
///
/// The part before the first underscore is the item type code; anything
/// after it is the level code.
///
/// # Examples
///
/// ```rust
/// use dropcalc::ItemKey;
///
/// let key = ItemKey::from_str("weapon_extreme_plus");
/// assert_eq!(key.type_code(), "weapon");
/// assert_eq!(key.level_code(), Some("extreme_plus"));
///
/// let gem: ItemKey = "gem".into();
/// assert_eq!(gem.level_code(), None);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemKey(Arc<str>);

impl Serialize for ItemKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ItemKey::from(s))
    }
}

impl ItemKey {
    /// Create a new `ItemKey` from a string slice.
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Build a key from a type code and an optional level code.
    ///
    /// An empty level yields the bare type key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dropcalc::ItemKey;
    ///
    /// assert_eq!(ItemKey::compose("weapon", "low").as_str(), "weapon_low");
    /// assert_eq!(ItemKey::compose("gem", "").as_str(), "gem");
    /// ```
    pub fn compose(type_code: &str, level_code: &str) -> Self {
        if level_code.is_empty() {
            Self::from_str(type_code)
        } else {
            Self::from(format!("{}_{}", type_code, level_code))
        }
    }

    /// Get the string representation of this key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The item type code (everything before the first underscore).
    pub fn type_code(&self) -> &str {
        match self.0.split_once('_') {
            Some((type_code, _)) => type_code,
            None => &self.0,
        }
    }

    /// The level code, if the key carries one.
    pub fn level_code(&self) -> Option<&str> {
        self.0
            .split_once('_')
            .map(|(_, level)| level)
            .filter(|level| !level.is_empty())
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::borrow::Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
