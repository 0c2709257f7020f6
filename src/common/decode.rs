//! Decoding of resource documents whose shape differs between implementations.
//!
//! Every decodable type declares which of its top-level fields are known to
//! arrive in a non-canonical shape. Decoding first tries the canonical shape;
//! only a data error on a document that actually carries one of those fields
//! in its alternate shape triggers a single widened retry. If the retry fails
//! too, the error from the canonical attempt is returned.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A field known to diverge from its canonical wire shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Divergence {
    /// Canonically a string; some firmware sends an integer
    NumericString(&'static str),
    /// Canonically an array; some firmware sends a single object
    OneOrMany(&'static str),
}

impl Divergence {
    pub fn field(&self) -> &'static str {
        match self {
            Divergence::NumericString(field) | Divergence::OneOrMany(field) => *field,
        }
    }

    /// Rewrite the field into its canonical shape. Returns whether anything changed.
    fn widen(&self, doc: &mut Map<String, Value>) -> bool {
        let Some(value) = doc.get_mut(self.field()) else {
            return false;
        };
        match self {
            Divergence::NumericString(_) if value.is_i64() || value.is_u64() => {
                *value = Value::String(value.to_string());
                true
            }
            Divergence::OneOrMany(_) if value.is_object() => {
                *value = Value::Array(vec![value.take()]);
                true
            }
            _ => false,
        }
    }
}

/// A type that can be decoded from a resource document
pub trait Schema: DeserializeOwned {
    const DIVERGENCES: &'static [Divergence] = &[];
}

/// Decode `raw` into `S`, widening known-divergent fields if the canonical
/// shape does not match.
pub fn decode_shape<S: Schema>(raw: &[u8]) -> Result<S, serde_json::Error> {
    let err = match serde_json::from_slice::<S>(raw) {
        Ok(decoded) => return Ok(decoded),
        Err(err) => err,
    };
    if !err.is_data() || S::DIVERGENCES.is_empty() {
        return Err(err);
    }
    match decode_widened::<S>(raw) {
        Some(decoded) => {
            log::debug!(
                "Decoded {} after widening divergent fields (canonical decode failed: {})",
                std::any::type_name::<S>(),
                err
            );
            Ok(decoded)
        }
        None => Err(err),
    }
}

fn decode_widened<S: Schema>(raw: &[u8]) -> Option<S> {
    let mut doc: Value = serde_json::from_slice(raw).ok()?;
    let fields = doc.as_object_mut()?;
    let mut widened = false;
    for divergence in S::DIVERGENCES {
        widened |= divergence.widen(fields);
    }
    if !widened {
        return None;
    }
    // Re-serialize rather than decode from the Value so embedded entities
    // still see a text deserializer.
    let bytes = serde_json::to_vec(&doc).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Treat an explicit `null` like an absent field
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
