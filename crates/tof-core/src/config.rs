//! Energy profile descriptions loaded from YAML or JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::PhysicalConstants;
use crate::errors::{ErrorInfo, TofError};
use crate::serde::{from_json_slice, from_yaml_slice};

fn default_temperature() -> f64 {
    298.15
}

fn config_error(code: &str, message: impl Into<String>) -> TofError {
    TofError::Config(ErrorInfo::new(code, message))
}

/// A catalytic cycle profile ready to be handed to a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Temperature in kelvin.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Relative free energies in cycle order.
    pub energies: Vec<f64>,
    /// Optional labels, one per energy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Unit system override.
    #[serde(default)]
    pub constants: PhysicalConstants,
}

impl ProfileConfig {
    /// Parses a profile from YAML bytes. JSON is accepted too since YAML is a superset.
    pub fn from_yaml(data: &[u8]) -> Result<Self, TofError> {
        from_yaml_slice(data)
    }

    /// Parses a profile from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self, TofError> {
        from_json_slice(data)
    }

    /// Loads a profile from disk, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self, TofError> {
        let with_path = |err: TofError| {
            TofError::Config(err.info().clone().with_context("path", path.display()))
        };
        let data = fs::read(path)
            .map_err(|err| with_path(config_error("profile-read", err.to_string())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&data).map_err(with_path),
            Some("yaml") | Some("yml") => Self::from_yaml(&data).map_err(with_path),
            other => Err(with_path(TofError::Config(
                ErrorInfo::new(
                    "profile-extension",
                    format!("unsupported profile extension '{}'", other.unwrap_or("")),
                )
                .with_hint("use a .yaml, .yml or .json file"),
            ))),
        }
    }
}

/// Parses a comma separated list of energies such as `0,15,-7`.
///
/// A single trailing comma is tolerated. Any other empty field is an error,
/// since dropping it would silently change the length of the profile.
pub fn parse_energy_list(raw: &str) -> Result<Vec<f64>, TofError> {
    let mut fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
        .into_iter()
        .enumerate()
        .map(|(position, item)| {
            if item.is_empty() {
                return Err(TofError::Config(
                    ErrorInfo::new("energy-parse", "empty field in energy list")
                        .with_context("position", position)
                        .with_hint("remove the doubled comma or supply the missing energy"),
                ));
            }
            item.parse::<f64>().map_err(|err| {
                TofError::Config(
                    ErrorInfo::new("energy-parse", err.to_string())
                        .with_context("position", position)
                        .with_context("value", item),
                )
            })
        })
        .collect()
}

/// Parses a comma separated list of labels.
pub fn parse_label_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
