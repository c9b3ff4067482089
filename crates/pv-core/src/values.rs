//! Extracted scalar values keyed by symbolic name

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar extracted from a table or taken from the curated constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    /// Pre-formatted text such as `"1.41 × 10⁻⁶"`
    Text(String),
}

impl Value {
    /// Numeric view of the value, `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps a trailing ".0" on whole floats (81.0, not 81)
            Value::Float(fl) => write!(f, "{:?}", fl),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Symbolic name → value, iterated in sorted key order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    values: BTreeMap<String, Value>,
}

impl ValueMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merge another map into this one; later values win
    pub fn extend(&mut self, other: ValueMap) {
        self.values.extend(other.values);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a value that a substitution depends on
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| Error::MissingValue(key.to_string()))
    }

    /// Format a numeric value with a fixed number of decimals
    pub fn fixed(&self, key: &str, decimals: usize) -> Result<String> {
        let x = self
            .require(key)?
            .as_f64()
            .ok_or_else(|| Error::NonNumericValue(key.to_string()))?;
        Ok(format!("{:.*}", decimals, x))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_listing_format() {
        assert_eq!(Value::Integer(187).to_string(), "187");
        assert_eq!(Value::Float(81.0).to_string(), "81.0");
        assert_eq!(Value::Float(0.881).to_string(), "0.881");
        assert_eq!(Value::from("79–81").to_string(), "79–81");
    }

    #[test]
    fn test_fixed_precision() {
        let mut values = ValueMap::new();
        values.insert("PACBIO_COSIM_MIN", 0.99871_f64);
        values.insert("HUMAN_UNIVERSAL", 50_i64);
        values.insert("TUSCO_RIN_P", "1.41 × 10⁻⁶");

        assert_eq!(values.fixed("PACBIO_COSIM_MIN", 4).unwrap(), "0.9987");
        assert_eq!(values.fixed("HUMAN_UNIVERSAL", 4).unwrap(), "50.0000");
        assert!(matches!(
            values.fixed("TUSCO_RIN_P", 4),
            Err(Error::NonNumericValue(_))
        ));
        assert!(matches!(
            values.fixed("OTHER_COSIM_MAX", 4),
            Err(Error::MissingValue(_))
        ));
    }

    #[test]
    fn test_iter_sorted_and_extend_overwrites() {
        let mut a = ValueMap::new();
        a.insert("MOUSE_TISSUE_MIN", 28_i64);
        a.insert("HUMAN_TISSUE_MIN", 60_i64);
        let mut b = ValueMap::new();
        b.insert("HUMAN_TISSUE_MIN", 61_i64);
        a.extend(b);

        let keys: Vec<&str> = a.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["HUMAN_TISSUE_MIN", "MOUSE_TISSUE_MIN"]);
        assert_eq!(a.get("HUMAN_TISSUE_MIN"), Some(&Value::Integer(61)));
    }

    #[test]
    fn test_json_is_flat_object() {
        let mut values = ValueMap::new();
        values.insert("BRAIN_TISSUE_GENES", 65_i64);
        values.insert("KIDNEY_PRE_RANGE", "79–81");
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"BRAIN_TISSUE_GENES":65,"KIDNEY_PRE_RANGE":"79–81"}"#);
    }
}
