//! Realm document loading.
//!
//! Realm data lives in one JSON document per realm. These helpers turn
//! documents into validated [`Realm`] records and report where a bad
//! document came from.

use crate::error::CalcError;
use crate::model::{Layer, Realm};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Parse a realm from a JSON string.
///
/// # Examples
///
/// ```rust
/// use dropcalc::loader::load_realm_str;
///
/// let realm = load_realm_str(r#"{"realm_name": "Abyss", "layers": {"layer_1": {}}}"#).unwrap();
/// assert_eq!(realm.name(), "Abyss");
/// assert!(realm.layer("layer_1").is_some());
///
/// assert!(load_realm_str(r#"{"realm_name": ""}"#).is_err());
/// ```
pub fn load_realm_str(json: &str) -> Result<Realm, CalcError> {
    serde_json::from_str(json).map_err(|e| CalcError::parse("realm document", e))
}

/// Parse a realm from a reader yielding UTF-8 JSON.
pub fn load_realm_reader<R: Read>(reader: R) -> Result<Realm, CalcError> {
    serde_json::from_reader(reader).map_err(|e| CalcError::parse("realm document", e))
}

/// Read and parse a realm document from disk.
pub fn load_realm_file(path: impl AsRef<Path>) -> Result<Realm, CalcError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading realm document");

    let contents = std::fs::read_to_string(path).map_err(|e| CalcError::io(path, e))?;
    let realm: Realm = serde_json::from_str(&contents)
        .map_err(|e| CalcError::parse(path.display().to_string(), e))?;

    info!(
        realm = realm.name(),
        layers = realm.layers().len(),
        monsters = realm.layers().values().map(Layer::monster_count).sum::<usize>(),
        path = %path.display(),
        "loaded realm"
    );
    Ok(realm)
}

/// Load several realm documents, failing on the first bad one.
pub fn load_realm_files<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Vec<Realm>, CalcError> {
    paths.into_iter().map(|path| load_realm_file(path)).collect()
}
