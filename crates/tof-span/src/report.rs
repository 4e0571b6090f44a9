//! Bundle of every span descriptor under fixed report keys.

use serde::{Deserialize, Serialize};
use tof_core::{LabeledValue, TofError};

use crate::hash::{round_f64, stable_hash_string};

fn round_pair(pair: &LabeledValue) -> LabeledValue {
    LabeledValue::new(pair.label.clone(), round_f64(pair.value))
}

fn round_pairs(pairs: &[LabeledValue]) -> Vec<LabeledValue> {
    pairs.iter().map(round_pair).collect()
}

/// All energetic span descriptors of one cycle, keyed the way downstream
/// tooling expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TofReport {
    /// Every state as `[label, energy]`.
    #[serde(rename = "States")]
    pub states: Vec<LabeledValue>,
    /// TOF-determining intermediate.
    #[serde(rename = "TDI")]
    pub tdi: LabeledValue,
    /// TOF-determining transition state.
    #[serde(rename = "TDTS")]
    pub tdts: LabeledValue,
    /// `E(TDTS) - E(TDI)`.
    #[serde(rename = "Energy Span")]
    pub energy_span: f64,
    /// Turnover frequency in s⁻¹.
    #[serde(rename = "Cycle TOF")]
    pub tof: f64,
    /// Degree of TOF control per ground state.
    #[serde(rename = "Ground State TOF Values")]
    pub ground_tofs: Vec<LabeledValue>,
    /// Degree of TOF control per transition state.
    #[serde(rename = "Transition State TOF Values")]
    pub ts_tofs: Vec<LabeledValue>,
}

impl TofReport {
    /// Content hash of the report with every number rounded to nine decimals,
    /// so last-digit noise does not change the digest.
    pub fn analysis_hash(&self) -> Result<String, TofError> {
        let rounded = TofReport {
            states: round_pairs(&self.states),
            tdi: round_pair(&self.tdi),
            tdts: round_pair(&self.tdts),
            energy_span: round_f64(self.energy_span),
            tof: round_f64(self.tof),
            ground_tofs: round_pairs(&self.ground_tofs),
            ts_tofs: round_pairs(&self.ts_tofs),
        };
        stable_hash_string(&rounded)
    }
}
