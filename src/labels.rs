//! Display labels for stored codes.
//!
//! Data files identify item types, levels and currencies by short codes.
//! The translators here map codes to display names; unknown codes pass
//! through unchanged so new codes in the data keep working.

use serde::{Deserialize, Serialize};

/// Item types whose display name never shows a level.
pub const LEVELLESS_TYPES: [&str; 4] = ["gem", "glove", "necklace", "badge"];

/// Item types whose levels are listed in [`LEVEL_ORDER`].
pub const TIERED_TYPES: [&str; 2] = ["weapon", "equipment"];

/// Canonical tier order of level codes.
pub const LEVEL_ORDER: [&str; 5] = ["low", "mid", "high", "premium", "extreme_plus"];

/// Display name of an item type code in the game's language.
///
/// # Examples
///
/// ```rust
/// use dropcalc::labels::item_type_name;
///
/// assert_eq!(item_type_name("weapon"), "武器");
/// assert_eq!(item_type_name("scroll"), "scroll");
/// ```
pub fn item_type_name(code: &str) -> &str {
    match code {
        "weapon" => "武器",
        "equipment" => "裝備",
        "gem" => "寶石",
        "glove" => "手套",
        "necklace" => "項鏈",
        "badge" => "徽章",
        other => other,
    }
}

/// Display name of a level code in the game's language.
pub fn level_name(code: &str) -> &str {
    match code {
        "low" => "下",
        "mid" => "中",
        "high" => "上",
        "premium" => "極",
        "extreme_plus" => "極+",
        other => other,
    }
}

/// Display name of a currency code in the game's language.
pub fn currency_name(code: &str) -> &str {
    match code {
        "silver" => "銀元",
        "copper" => "銅幣",
        "gold" => "金元",
        "dream_coin" => "夢元",
        other => other,
    }
}

/// Display name of a layer id: `layer_3` becomes `3c`.
///
/// # Examples
///
/// ```rust
/// use dropcalc::labels::layer_display_name;
///
/// assert_eq!(layer_display_name("layer_3"), "3c");
/// assert_eq!(layer_display_name("rift"), "riftc");
/// ```
pub fn layer_display_name(layer_id: &str) -> String {
    let stripped = layer_id.strip_prefix("layer_").unwrap_or(layer_id);
    format!("{}c", stripped)
}

/// Label provider used when rendering calculation results.
///
/// Every method defaults to returning the code itself.
pub trait Labels: Send + Sync {
    /// Display name for an item type code.
    fn item_type<'a>(&self, code: &'a str) -> &'a str {
        code
    }

    /// Display name for a level code.
    fn level<'a>(&self, code: &'a str) -> &'a str {
        code
    }

    /// Display name for a currency code.
    fn currency<'a>(&self, code: &'a str) -> &'a str {
        code
    }

    /// Marker appended to a raw total that must be refined.
    fn needs_refinement(&self) -> &str {
        "needs refinement"
    }

    /// Marker appended to a raw total that is usable as dropped.
    fn no_refinement(&self) -> &str {
        "no refinement needed"
    }
}

/// Labels that show codes as stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeLabels;

impl Labels for CodeLabels {}

/// Labels in the game's own display language.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicLabels;

impl Labels for ClassicLabels {
    fn item_type<'a>(&self, code: &'a str) -> &'a str {
        item_type_name(code)
    }

    fn level<'a>(&self, code: &'a str) -> &'a str {
        level_name(code)
    }

    fn currency<'a>(&self, code: &'a str) -> &'a str {
        currency_name(code)
    }

    fn needs_refinement(&self) -> &str {
        "需精煉"
    }

    fn no_refinement(&self) -> &str {
        "不用精煉"
    }
}

/// Selects a built-in label set, e.g. from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Show codes as stored.
    #[default]
    Codes,
    /// Show the game's display names.
    Classic,
}

impl LabelStyle {
    /// Build the label provider for this style.
    pub fn labels(self) -> Box<dyn Labels> {
        match self {
            LabelStyle::Codes => Box::new(CodeLabels),
            LabelStyle::Classic => Box::new(ClassicLabels),
        }
    }
}

/// Render the display name of an item: type, then level when shown.
pub fn item_display_name(labels: &dyn Labels, type_code: &str, level_code: Option<&str>) -> String {
    let type_name = labels.item_type(type_code);
    match level_code {
        Some(level) if !LEVELLESS_TYPES.contains(&type_code) => {
            format!("{} {}", type_name, labels.level(level))
        }
        _ => type_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(item_type_name("necklace"), "項鏈");
        assert_eq!(level_name("extreme_plus"), "極+");
        assert_eq!(currency_name("dream_coin"), "夢元");
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        assert_eq!(item_type_name("relic"), "relic");
        assert_eq!(level_name("mythic"), "mythic");
        assert_eq!(currency_name("pearl"), "pearl");
    }

    #[test]
    fn test_code_labels_are_identity() {
        let labels = CodeLabels;
        assert_eq!(labels.item_type("weapon"), "weapon");
        assert_eq!(labels.currency("silver"), "silver");
    }

    #[test]
    fn test_item_display_name() {
        assert_eq!(item_display_name(&CodeLabels, "weapon", Some("low")), "weapon low");
        assert_eq!(item_display_name(&ClassicLabels, "weapon", Some("low")), "武器 下");
        assert_eq!(item_display_name(&ClassicLabels, "gem", Some("high")), "寶石");
        assert_eq!(item_display_name(&CodeLabels, "glove", None), "glove");
    }

    #[test]
    fn test_label_style_from_config_value() {
        let style: LabelStyle = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(style, LabelStyle::Classic);
        assert_eq!(style.labels().currency("gold"), "金元");
        assert_eq!(LabelStyle::default().labels().currency("gold"), "gold");
    }
}
