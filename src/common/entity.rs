//! Decoded resources paired with the raw document they were decoded from.
//!
//! An [`Entity`] keeps three things apart: the server-assigned identity, the
//! caller-mutable typed value, and the verbatim [`Snapshot`] of the last
//! fetch. Updates are computed by re-decoding the snapshot and comparing the
//! declared writable fields of both values; nothing else can reach the wire.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::interfaces::RemoteClient;

use super::decode::{decode_shape, nullable, Divergence, Schema};

/// Server-assigned identity of a resource
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    #[serde(rename = "@odata.id", default, deserialize_with = "nullable")]
    odata_id: String,
    #[serde(rename = "Id", default, deserialize_with = "nullable")]
    id: String,
    #[serde(rename = "Name", default, deserialize_with = "nullable")]
    name: String,
    #[serde(rename = "MemberId", default, skip_serializing_if = "Option::is_none")]
    member_id: Option<String>,
}

impl Schema for Identity {
    const DIVERGENCES: &'static [Divergence] = &[Divergence::NumericString("MemberId")];
}

impl Identity {
    pub fn uri(&self) -> &str {
        &self.odata_id
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref()
    }
}

/// The exact bytes last received for a resource
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[u8]>);

impl Snapshot {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Snapshot {
    fn from(raw: &[u8]) -> Self {
        Snapshot(Arc::from(raw))
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Snapshot({} bytes)", self.0.len())
    }
}

/// A field the caller may change and send back, with its wire name
pub struct WritableField<T> {
    pub name: &'static str,
    pub value: fn(&T) -> serde_json::Result<Value>,
}

/// A resource type that can be fetched and updated
pub trait Resource: Schema + 'static {
    const WRITABLE_FIELDS: &'static [WritableField<Self>] = &[];
}

#[derive(Clone, Debug)]
pub struct Entity<T> {
    identity: Identity,
    current: T,
    snapshot: Snapshot,
}

impl<T> Entity<T> {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn uri(&self) -> &str {
        self.identity.uri()
    }

    pub fn id(&self) -> &str {
        self.identity.id()
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn member_id(&self) -> Option<&str> {
        self.identity.member_id()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_inner(self) -> T {
        self.current
    }
}

impl<T: Resource> Entity<T> {
    pub fn decode(raw: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(Entity {
            identity: decode_shape(raw)?,
            current: decode_shape(raw)?,
            snapshot: Snapshot::from(raw),
        })
    }

    pub fn fetch<C: RemoteClient + ?Sized>(client: &C, uri: &str) -> Result<Self, Error> {
        let raw = client.get(uri)?;
        let mut entity = Self::decode(&raw)?;
        if entity.identity.odata_id.is_empty() {
            entity.identity.odata_id = uri.to_string();
        }
        Ok(entity)
    }

    /// The value as last returned by the server
    pub fn original(&self) -> Result<T, serde_json::Error> {
        decode_shape(self.snapshot.as_bytes())
    }

    /// Writable fields whose current value differs from the snapshot, keyed by
    /// wire name. Nested objects only carry the members that changed.
    pub fn changes(&self) -> Result<Map<String, Value>, Error> {
        let original = self.original()?;
        let mut payload = Map::new();
        for field in T::WRITABLE_FIELDS {
            let before = (field.value)(&original).map_err(Error::Encode)?;
            let after = (field.value)(&self.current).map_err(Error::Encode)?;
            if let Some(changed) = diff(&before, after) {
                payload.insert(field.name.to_string(), changed);
            }
        }
        Ok(payload)
    }

    /// Send changed writable fields to the server. Does nothing, without any
    /// request, when no writable field changed.
    pub fn update<C: RemoteClient + ?Sized>(&self, client: &C) -> Result<(), Error> {
        let payload = self.changes()?;
        if payload.is_empty() {
            log::debug!("No writable fields changed on {}; skipping update", self.uri());
            return Ok(());
        }
        if self.uri().is_empty() {
            return Err(Error::MissingUri);
        }
        let body = serde_json::to_vec(&payload).map_err(Error::Encode)?;
        log::debug!(
            "Updating {} ({})",
            self.uri(),
            payload.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        client.patch(self.uri(), &body)?;
        Ok(())
    }
}

fn diff(before: &Value, after: Value) -> Option<Value> {
    if *before == after {
        return None;
    }
    match (before, after) {
        (Value::Object(before), Value::Object(after)) => {
            let mut changed = Map::new();
            for key in before.keys() {
                if !after.contains_key(key) {
                    changed.insert(key.clone(), Value::Null);
                }
            }
            for (key, value) in after {
                match before.get(&key) {
                    Some(old) => {
                        if let Some(v) = diff(old, value) {
                            changed.insert(key, v);
                        }
                    }
                    None => {
                        changed.insert(key, value);
                    }
                }
            }
            Some(Value::Object(changed))
        }
        (_, after) => Some(after),
    }
}

impl<T> Deref for Entity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.current
    }
}

impl<T> DerefMut for Entity<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.current
    }
}

impl<T: PartialEq> PartialEq for Entity<T> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity && self.current == other.current
    }
}

/// Embedded entities keep the verbatim text of their own element as snapshot
impl<'de, T: Resource> Deserialize<'de> for Entity<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Entity::decode(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}

impl<T: Serialize> Serialize for Entity<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Flat<'a, T> {
            #[serde(flatten)]
            identity: &'a Identity,
            #[serde(flatten)]
            current: &'a T,
        }
        Flat {
            identity: &self.identity,
            current: &self.current,
        }
        .serialize(serializer)
    }
}
