//! Catalog document loading.
//!
//! Decodes a bundled Scryfall card list into a [`Catalog`]. Decoding is
//! strict: a document either decodes completely or the load fails, there is
//! no partially-populated result.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::{Map, Value};

use crate::config::REQUIRED_ROOT_KEYS;
use crate::error::{CatalogError, Result};
use crate::models::Catalog;

/// Decode a catalog document from raw bytes.
///
/// # Errors
///
/// * [`CatalogError::Decode`] if the bytes are not valid JSON, the root is
///   not an object, or one of `object`, `total_cards`, `has_more`, `data` is
///   missing or has the wrong type.
/// * [`CatalogError::MalformedShape`] if a card field is present with the
///   wrong type.
pub fn load(document: &[u8]) -> Result<Catalog> {
    let value: Value = serde_json::from_slice(document).map_err(|e| {
        CatalogError::Decode(format!(
            "invalid JSON at line {} column {}: {}",
            e.line(),
            e.column(),
            e
        ))
    })?;

    let root = match &value {
        Value::Object(map) => map,
        other => {
            return Err(CatalogError::Decode(format!(
                "document root must be an object, found {}",
                json_type_name(other)
            )))
        }
    };
    check_root(root)?;

    let catalog: Catalog =
        serde_json::from_value(value).map_err(|e| CatalogError::MalformedShape(e.to_string()))?;

    tracing::debug!(
        cards = catalog.data.len(),
        total_cards = catalog.total_cards,
        "catalog decoded"
    );
    Ok(catalog)
}

/// Read and decode a catalog file (handles `.gz` transparently).
///
/// A missing or unreadable file, or a corrupt gzip stream, is a
/// [`CatalogError::Decode`] naming the path.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let bytes = read_document(path).map_err(|e| {
        CatalogError::Decode(format!("cannot read {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read catalog file");
    load(&bytes)
}

/// Encode a catalog back into JSON bytes.
///
/// Absent optional fields are omitted, so a decoded document re-encodes with
/// the same present/absent pattern.
pub fn encode(catalog: &Catalog) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(catalog)?)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_document(path: &Path) -> io::Result<Vec<u8>> {
    if path.extension().and_then(|e| e.to_str()) != Some("gz") {
        return fs::read(path);
    }
    let file = fs::File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut buf = Vec::new();
    decoder.read_to_end(&mut buf)?;
    Ok(buf)
}

fn check_root(root: &Map<String, Value>) -> Result<()> {
    for key in REQUIRED_ROOT_KEYS {
        let field = root
            .get(key)
            .ok_or_else(|| CatalogError::Decode(format!("missing required field `{}`", key)))?;

        let ok = match key {
            "object" => field.is_string(),
            "total_cards" => field.is_i64(),
            "has_more" => field.is_boolean(),
            "data" => field.is_array(),
            _ => true,
        };
        if !ok {
            return Err(CatalogError::Decode(format!(
                "field `{}` has the wrong type ({})",
                key,
                json_type_name(field)
            )));
        }
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
