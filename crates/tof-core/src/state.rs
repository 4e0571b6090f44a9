//! Labelled energy records.
//!
//! Both [`State`] and [`LabeledValue`] serialise as two element arrays
//! `[label, value]` so downstream consumers see plain ordered pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single point of a free-energy profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct State {
    label: String,
    energy: f64,
}

impl State {
    /// Creates a new state from its label and relative free energy.
    pub fn new(label: impl Into<String>, energy: f64) -> Self {
        Self {
            label: label.into(),
            energy,
        }
    }

    /// Returns the state label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the relative free energy.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Projects the state onto an ordered `(label, energy)` pair.
    pub fn as_pair(&self) -> LabeledValue {
        LabeledValue::new(self.label.clone(), self.energy)
    }

    /// Consumes the state into its `(label, energy)` tuple.
    pub fn into_tuple(self) -> (String, f64) {
        (self.label, self.energy)
    }
}

impl From<(String, f64)> for State {
    fn from((label, energy): (String, f64)) -> Self {
        Self { label, energy }
    }
}

impl From<State> for (String, f64) {
    fn from(state: State) -> Self {
        state.into_tuple()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State {}: {}", self.label, self.energy)
    }
}

/// Ordered `(label, value)` pair returned by every paired query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct LabeledValue {
    /// Label of the state the value belongs to.
    pub label: String,
    /// Energy or fraction attached to the label.
    pub value: f64,
}

impl LabeledValue {
    /// Creates a new pair.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Returns the pair as a borrowed tuple.
    pub fn as_tuple(&self) -> (&str, f64) {
        (&self.label, self.value)
    }
}

impl From<(String, f64)> for LabeledValue {
    fn from((label, value): (String, f64)) -> Self {
        Self { label, value }
    }
}

impl From<LabeledValue> for (String, f64) {
    fn from(pair: LabeledValue) -> Self {
        (pair.label, pair.value)
    }
}

impl From<&State> for LabeledValue {
    fn from(state: &State) -> Self {
        state.as_pair()
    }
}
