use serde_json::{Map, Value};
use smol_str::SmolStr;
use std::str::FromStr;

use crate::error::{MappingError, Result};
use crate::types::Datetime;

/// Read-only view over a JSON object with typed, explicit accessors
///
/// Every accessor names the key it reads, so failures come back as a
/// [`MappingError`] pointing at the field instead of a panic. A `null` value is treated
/// the same as an absent key.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Views `value` as an object. `name` is used in the error if it is anything else.
    pub fn new(value: &'a Value, name: &str) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            Value::Null => Err(MappingError::missing(name)),
            _ => Err(MappingError::invalid(name, "an object")),
        }
    }

    /// The raw value under `key`, or `None` for absent and `null`.
    pub fn optional_value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// The raw value under `key`.
    pub fn required_value(&self, key: &str) -> Result<&'a Value> {
        self.optional_value(key)
            .ok_or_else(|| MappingError::missing(key))
    }

    /// A string field.
    pub fn required_str(&self, key: &str) -> Result<&'a str> {
        self.required_value(key)?
            .as_str()
            .ok_or_else(|| MappingError::invalid(key, "a string"))
    }

    /// A string field that may be absent or `null`.
    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.optional_value(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| MappingError::invalid(key, "a string")),
        }
    }

    /// An identifier. The API is not consistent about quoting ids, so integers are
    /// accepted and rendered in decimal.
    pub fn required_id(&self, key: &str) -> Result<SmolStr> {
        match self.required_value(key)? {
            Value::String(s) => Ok(SmolStr::new(s)),
            Value::Number(n) if n.is_u64() || n.is_i64() => Ok(SmolStr::new(n.to_string())),
            _ => Err(MappingError::invalid(key, "a string or integer id")),
        }
    }

    /// A non-negative integer field.
    pub fn required_u64(&self, key: &str) -> Result<u64> {
        self.required_value(key)?
            .as_u64()
            .ok_or_else(|| MappingError::invalid(key, "a non-negative integer"))
    }

    /// A nested object field.
    pub fn required_object(&self, key: &str) -> Result<Fields<'a>> {
        Fields::new(self.required_value(key)?, key)
    }

    /// A nested object field that may be absent or `null`.
    pub fn optional_object(&self, key: &str) -> Result<Option<Fields<'a>>> {
        self.optional_value(key)
            .map(|v| Fields::new(v, key))
            .transpose()
    }

    /// An array field.
    pub fn required_array(&self, key: &str) -> Result<&'a [Value]> {
        self.required_value(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| MappingError::invalid(key, "an array"))
    }

    /// An array field where absent and `null` both mean empty.
    pub fn optional_array(&self, key: &str) -> Result<&'a [Value]> {
        match self.optional_value(key) {
            None => Ok(&[]),
            Some(v) => v
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| MappingError::invalid(key, "an array")),
        }
    }

    /// A date-time string field, normalised to UTC.
    pub fn required_datetime(&self, key: &str) -> Result<Datetime> {
        let raw = self.required_str(key)?;
        Datetime::from_str(raw).map_err(|source| MappingError::InvalidTimestamp {
            field: SmolStr::new(key),
            value: SmolStr::new(raw),
            source,
        })
    }
}
