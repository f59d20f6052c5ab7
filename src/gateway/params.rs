//! Parameter map sent to SerpAPI

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Primitive value of a query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u8> for ParamValue {
    fn from(n: u8) -> Self {
        Self::Int(n.into())
    }
}

/// Parameters for one SerpAPI request, built fresh per tool call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    params: BTreeMap<String, ParamValue>,
}

impl SearchParams {
    /// Start a parameter map for the given engine
    pub fn for_engine(engine: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.set("engine", engine.into());
        params
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) -> &mut Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Set a string parameter only when it is present and non-empty
    pub fn set_opt_str(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.set(key, v);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.params.get(key) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.params.get(key) {
            Some(ParamValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn engine(&self) -> Option<&str> {
        self.get_str("engine")
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Key/value pairs for a URL query string
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.params.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
    }

    /// Same map with the credential masked, for logging
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.contains("api_key") {
            copy.set("api_key", "***");
        }
        copy
    }
}
