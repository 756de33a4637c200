use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value substituted into a `{{placeholder}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            ParamValue::Number(n) if n.is_infinite() => f.write_str(if *n < 0.0 { "-∞" } else { "∞" }),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

macro_rules! impl_number_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_number_param!(i32, i64, u32, u64, usize, f32, f64);

/// Parameters of a translation call.
///
/// `count` is kept apart from the named values: when present it selects a
/// plural variant of the key, and it is also substituted for `{{count}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, ParamValue>,
}

impl TranslationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params carrying only a count
    pub fn counted(count: impl Into<f64>) -> Self {
        Self::new().with_count(count)
    }

    pub fn with_count(mut self, count: impl Into<f64>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Adds a named value. A value named `count` that is numeric also sets
    /// the count, so callers can pass every parameter the same way.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        if name == "count" {
            if let ParamValue::Number(n) = value {
                self.count = Some(n);
                return;
            }
        }
        self.values.insert(name, value);
    }

    /// Value substituted for `{{name}}`
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        if name == "count" {
            if let Some(count) = self.count {
                return Some(ParamValue::Number(count));
            }
        }
        self.values.get(name).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.count.is_none() && self.values.is_empty()
    }

    /// Canonical form used in cache keys. Keys are ordered, so equal params
    /// always serialize identically.
    ///
    /// JSON writes every non-finite number as `null`, so params holding one
    /// have no fragment and are never cached.
    pub fn cache_fragment(&self) -> Option<String> {
        if self.is_empty() {
            return Some(String::new());
        }
        if self.has_non_finite_number() {
            return None;
        }
        serde_json::to_string(self).ok()
    }

    fn has_non_finite_number(&self) -> bool {
        self.count.is_some_and(|count| !count.is_finite())
            || self
                .values
                .values()
                .any(|value| matches!(value, ParamValue::Number(n) if !n.is_finite()))
    }
}
