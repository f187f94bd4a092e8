//! Error types for material calculation.
//!
//! Every failure a calculation, a document load or a config load can
//! produce is represented by the `CalcError` enum. All of them are scoped
//! to the single call that raised them.

use thiserror::Error;

/// Errors that can occur while loading realm data or running a calculation.
///
/// # Examples
///
/// ```rust
/// use dropcalc::CalcError;
///
/// let err = CalcError::InvalidQuantity(0);
/// println!("{}", err); // "Quantity must be a positive integer, got 0"
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A drop specification string is not `<integer>` or `<integer>N`.
    #[error("Invalid drop spec {spec:?}: {reason}")]
    InvalidDropSpec { spec: String, reason: String },

    /// The requested layer does not exist in the realm.
    #[error("Layer {layer} not found in realm {realm}")]
    LayerNotFound { realm: String, layer: String },

    /// No monster in the layer drops the requested item.
    #[error("No monster in layer {layer} drops item {item}")]
    NoSource { layer: String, item: String },

    /// The requested craft quantity is zero or negative.
    #[error("Quantity must be a positive integer, got {0}")]
    InvalidQuantity(i64),

    /// A realm was constructed with an empty or blank name.
    #[error("Realm name cannot be empty")]
    EmptyRealmName,

    /// No realm with this name is registered.
    #[error("Realm not found: {0}")]
    RealmNotFound(String),

    /// The raw material total does not fit in 64 bits.
    #[error("Material total overflows for quantity {quantity} x {per_craft} per craft")]
    QuantityOverflow { quantity: u64, per_craft: u64 },

    /// The item's refinement recipe charges currency but consumes no material,
    /// so the number of refinements is undefined.
    #[error("Refinement recipe for {item} charges currency but consumes no material")]
    ZeroRefineMaterial { item: String },

    /// A summed recipe cost or a total currency charge does not fit in 64 bits.
    #[error("Refinement cost for {item} overflows")]
    CostOverflow { item: String },

    /// A JSON or TOML document could not be parsed.
    #[error("Failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// A file could not be read.
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl CalcError {
    pub(crate) fn parse(origin: impl Into<String>, err: impl std::fmt::Display) -> Self {
        CalcError::Parse {
            origin: origin.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        CalcError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
