//! Drop spec codec.
//!
//! Drop tables store each entry as a compact string: an integer quantity,
//! optionally followed by `N`. Without the suffix the dropped material is
//! raw and must be refined before use; with it the drop is usable as-is.
//! Parsing happens here and nowhere else, so the calculation engine only
//! ever sees typed `DropSpec` values.

use crate::error::CalcError;
use std::fmt;
use std::str::FromStr;

/// Suffix marking a drop that needs no refinement.
pub const REFINED_SUFFIX: char = 'N';

/// A decoded drop table entry.
///
/// # Examples
///
/// ```rust
/// use dropcalc::DropSpec;
///
/// let raw: DropSpec = "3".parse().unwrap();
/// assert_eq!(raw.quantity, 3);
/// assert!(raw.needs_refinement);
///
/// let usable: DropSpec = "12N".parse().unwrap();
/// assert_eq!(usable.quantity, 12);
/// assert!(!usable.needs_refinement);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropSpec {
    /// Units of material needed per crafted item from this source.
    pub quantity: u32,
    /// Whether the dropped material must be refined before crafting.
    pub needs_refinement: bool,
}

impl DropSpec {
    /// Create a new `DropSpec`.
    pub fn new(quantity: u32, needs_refinement: bool) -> Self {
        Self {
            quantity,
            needs_refinement,
        }
    }
}

/// Parse a drop spec string.
///
/// Strips a single trailing `N` and parses the rest as a non-negative
/// integer. No whitespace trimming or locale-specific formats.
///
/// # Errors
///
/// Returns `CalcError::InvalidDropSpec` when the remainder is not a valid
/// `u32`.
///
/// # Examples
///
/// ```rust
/// use dropcalc::drop_spec::parse_drop;
///
/// assert!(parse_drop("5N").is_ok());
/// assert!(parse_drop("five").is_err());
/// assert!(parse_drop("-1").is_err());
/// ```
pub fn parse_drop(spec: &str) -> Result<DropSpec, CalcError> {
    let (digits, needs_refinement) = match spec.strip_suffix(REFINED_SUFFIX) {
        Some(rest) => (rest, false),
        None => (spec, true),
    };

    let quantity = digits
        .parse::<u32>()
        .map_err(|e| CalcError::InvalidDropSpec {
            spec: spec.to_string(),
            reason: e.to_string(),
        })?;

    Ok(DropSpec::new(quantity, needs_refinement))
}

impl FromStr for DropSpec {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_drop(s)
    }
}

impl fmt::Display for DropSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_refinement {
            write!(f, "{}", self.quantity)
        } else {
            write!(f, "{}{}", self.quantity, REFINED_SUFFIX)
        }
    }
}
