//! Value coercion and path helpers shared by the loader and its lookups.

use figment::value::{Dict, Value};
use serde_json::Value as Json;
use std::collections::BTreeMap;

use super::error::ConfigError;

/// Map an environment variable name to a config path.
///
/// The name is lowercased and every `_` becomes `delimiter`, so
/// `DATABASE_HOST` is `database.host` under the default delimiter.
pub fn env_var_path(name: &str, delimiter: &str) -> String {
    name.to_lowercase().replace('_', delimiter)
}

/// Flatten nested dictionaries into `a<delim>b<delim>c` keys.
///
/// Empty dictionaries and arrays are kept as leaves.
pub(crate) fn flatten(dict: &Dict, delimiter: &str) -> Dict {
    let mut flat = Dict::new();
    flatten_into(&mut flat, None, dict, delimiter);
    flat
}

fn flatten_into(flat: &mut Dict, prefix: Option<&str>, dict: &Dict, delimiter: &str) {
    for (key, value) in dict {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{delimiter}{key}"),
            None => key.clone(),
        };

        match value {
            Value::Dict(_, inner) if !inner.is_empty() => {
                flatten_into(flat, Some(&path), inner, delimiter);
            }
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// Inverse of [`flatten`]: split every key on `delimiter` into nested
/// dictionaries. Keys with an empty segment are kept verbatim.
pub(crate) fn unflatten(flat: Dict, delimiter: &str) -> Dict {
    let mut root = Dict::new();
    for (key, value) in flat {
        if key.split(delimiter).any(str::is_empty) {
            root.insert(key, value);
            continue;
        }
        let segments: Vec<&str> = key.split(delimiter).collect();
        insert_nested(&mut root, &segments, value);
    }
    root
}

fn insert_nested(dict: &mut Dict, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [leaf] => {
            dict.insert((*leaf).to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = dict
                .entry((*head).to_string())
                .or_insert_with(|| Value::from(Dict::new()));
            if !matches!(entry, Value::Dict(..)) {
                *entry = Value::from(Dict::new());
            }
            if let Value::Dict(_, inner) = entry {
                insert_nested(inner, rest, value);
            }
        }
    }
}

/// Flatten a JSON object into `path -> value` pairs (used for display).
pub fn flatten_json(
    map: &serde_json::Map<String, Json>,
    delimiter: &str,
) -> BTreeMap<String, Json> {
    let mut out = BTreeMap::new();
    flatten_json_into(&mut out, None, map, delimiter);
    out
}

fn flatten_json_into(
    out: &mut BTreeMap<String, Json>,
    prefix: Option<&str>,
    map: &serde_json::Map<String, Json>,
    delimiter: &str,
) {
    for (key, value) in map {
        let path = prefix.map_or_else(|| key.clone(), |p| format!("{p}{delimiter}{key}"));
        match value {
            Json::Object(inner) if !inner.is_empty() => {
                flatten_json_into(out, Some(&path), inner, delimiter);
            }
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

fn mismatch(path: &str, expected: &'static str) -> ConfigError {
    ConfigError::TypeMismatch {
        path: path.to_string(),
        expected,
    }
}

/// Render a scalar as text; `None` for arrays and objects.
pub(crate) fn scalar_text(value: &Json) -> Option<String> {
    match value {
        Json::String(s) => Some(s.clone()),
        Json::Number(n) => Some(n.to_string()),
        Json::Bool(b) => Some(b.to_string()),
        Json::Null => Some(String::new()),
        Json::Array(_) | Json::Object(_) => None,
    }
}

pub(crate) fn to_string(path: &str, value: &Json) -> Result<String, ConfigError> {
    scalar_text(value).ok_or_else(|| mismatch(path, "string"))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "f" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn to_bool(path: &str, value: &Json) -> Result<bool, ConfigError> {
    match value {
        Json::Bool(b) => Ok(*b),
        Json::String(s) => parse_bool(s).ok_or_else(|| mismatch(path, "bool")),
        Json::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        _ => Err(mismatch(path, "bool")),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(f: f64) -> Option<i64> {
    // `as` saturates; reject what cannot be represented instead.
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

pub(crate) fn to_int(path: &str, value: &Json) -> Result<i64, ConfigError> {
    let coerced = match value {
        Json::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Json::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        Json::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };
    coerced.ok_or_else(|| mismatch(path, "int"))
}

pub(crate) fn to_float(path: &str, value: &Json) -> Result<f64, ConfigError> {
    let coerced = match value {
        Json::Number(n) => n.as_f64(),
        Json::String(s) => s.trim().parse::<f64>().ok(),
        Json::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    coerced.ok_or_else(|| mismatch(path, "float"))
}

pub(crate) fn to_string_map(
    path: &str,
    value: &Json,
) -> Result<BTreeMap<String, String>, ConfigError> {
    let Json::Object(map) = value else {
        return Err(mismatch(path, "map"));
    };

    Ok(map
        .iter()
        .map(|(key, entry)| {
            let text = scalar_text(entry).unwrap_or_else(|| entry.to_string());
            (key.clone(), text)
        })
        .collect())
}
