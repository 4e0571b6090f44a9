//! Report and profile (de)serialisation.
//!
//! Reports are written with object keys sorted so that two runs over the same
//! energy profile produce byte-identical JSON and therefore identical hashes.

use std::collections::BTreeMap;
use std::iter::FromIterator;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, TofError};

fn serde_error(code: &str, err: impl ToString) -> TofError {
    TofError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// JSON bytes with sorted keys, the input of report hashing.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, TofError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json_write", err))?;
    Ok(bytes)
}

/// Indented sorted-key JSON for reports printed to a terminal.
pub fn to_canonical_json_pretty<T: Serialize>(value: &T) -> Result<String, TofError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    serde_json::to_string_pretty(&canonicalize(value))
        .map_err(|err| serde_error("json_write", err))
}

/// Reads a JSON profile or report. Failures map to `TofError::Serde`.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, TofError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json_deserialize", err))
}

/// Writes a report as YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, TofError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

/// Reads a YAML profile or report. Failures map to `TofError::Serde`.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, TofError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml_deserialize", err))
}
