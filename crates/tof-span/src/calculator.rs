//! Validated entry point that builds a cycle and its span table.

use tof_core::errors::{ErrorInfo, TofError};
use tof_core::{LabeledValue, PhysicalConstants, State};
use tracing::debug;

use crate::cycle::CatalyticCycle;
use crate::report::TofReport;
use crate::table::InterconversionTable;

fn input_error(code: &str, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

/// Default label for position `index`: `g{n}` on ground states, `ts{n}` on
/// transition states, with `n` the 1-based step number.
pub fn default_label(index: usize) -> String {
    let step = index / 2 + 1;
    if index % 2 == 0 {
        format!("g{step}")
    } else {
        format!("ts{step}")
    }
}

fn validate(energies: &[f64], labels: Option<&[String]>) -> Result<(), TofError> {
    if energies.len() % 2 == 0 {
        return Err(TofError::Input(
            input_error(
                "even-length",
                format!(
                    "energies must have an odd length, current length is {}",
                    energies.len()
                ),
            )
            .with_context("energies", energies.len())
            .with_hint("a cycle alternates ground and transition states and ends on a ground state"),
        ));
    }
    if let Some(labels) = labels {
        if labels.len() != energies.len() {
            return Err(TofError::Input(
                input_error(
                    "label-length-mismatch",
                    "labels must have the same length as energies",
                )
                .with_context("energies", energies.len())
                .with_context("labels", labels.len()),
            ));
        }
    }
    Ok(())
}

/// Energetic span analysis of one catalytic cycle.
///
/// Everything is computed at construction; the queries only project the
/// owned cycle and table.
#[derive(Debug, Clone, PartialEq)]
pub struct TofCalculator {
    temperature: f64,
    cycle: CatalyticCycle,
    table: InterconversionTable,
}

impl TofCalculator {
    /// Validates the profile and builds the cycle and its span table.
    pub fn new(
        temperature: f64,
        energies: &[f64],
        labels: Option<Vec<String>>,
    ) -> Result<Self, TofError> {
        Self::with_constants(temperature, energies, labels, PhysicalConstants::default())
    }

    /// Same as [`TofCalculator::new`] with an explicit unit system.
    pub fn with_constants(
        temperature: f64,
        energies: &[f64],
        labels: Option<Vec<String>>,
        constants: PhysicalConstants,
    ) -> Result<Self, TofError> {
        validate(energies, labels.as_deref())?;

        let labels =
            labels.unwrap_or_else(|| (0..energies.len()).map(default_label).collect());
        let states: Vec<State> = labels
            .into_iter()
            .zip(energies.iter().copied())
            .map(|(label, energy)| State::new(label, energy))
            .collect();
        let cycle = CatalyticCycle::new(states)?;
        let table = InterconversionTable::with_constants(&cycle, temperature, constants)?;
        debug!(
            temperature,
            states = cycle.states().len(),
            tdi = table.tdi().label(),
            tdts = table.tdts().label(),
            "constructed tof calculator"
        );

        Ok(Self {
            temperature,
            cycle,
            table,
        })
    }

    /// Temperature in kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Underlying cycle.
    pub fn cycle(&self) -> &CatalyticCycle {
        &self.cycle
    }

    /// Underlying span table.
    pub fn table(&self) -> &InterconversionTable {
        &self.table
    }

    /// `(label, energy)` of every state, in cycle order.
    pub fn states(&self) -> Vec<LabeledValue> {
        self.cycle.state_pairs()
    }

    /// TOF-determining intermediate.
    pub fn tdi(&self) -> LabeledValue {
        self.table.tdi().as_pair()
    }

    /// TOF-determining transition state.
    pub fn tdts(&self) -> LabeledValue {
        self.table.tdts().as_pair()
    }

    /// Energy span `E(TDTS) - E(TDI)`.
    pub fn energy_span(&self) -> f64 {
        self.table.tdts().energy() - self.table.tdi().energy()
    }

    /// Turnover frequency in s⁻¹.
    pub fn tof(&self) -> f64 {
        self.table.tof()
    }

    /// Degree of TOF control per ground state.
    pub fn ground_tofs(&self) -> Vec<LabeledValue> {
        self.cycle
            .ground_states()
            .zip(self.table.ground_tofs())
            .map(|(state, fraction)| LabeledValue::new(state.label(), *fraction))
            .collect()
    }

    /// Degree of TOF control per transition state.
    pub fn ts_tofs(&self) -> Vec<LabeledValue> {
        self.cycle
            .transition_states()
            .zip(self.table.ts_tofs())
            .map(|(state, fraction)| LabeledValue::new(state.label(), *fraction))
            .collect()
    }

    /// Every descriptor bundled into one report.
    pub fn all(&self) -> TofReport {
        TofReport {
            states: self.states(),
            tdi: self.tdi(),
            tdts: self.tdts(),
            energy_span: self.energy_span(),
            tof: self.tof(),
            ground_tofs: self.ground_tofs(),
            ts_tofs: self.ts_tofs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_follow_step_numbers() {
        let labels: Vec<_> = (0..5).map(default_label).collect();
        assert_eq!(labels, vec!["g1", "ts1", "g2", "ts2", "g3"]);
    }

    #[test]
    fn validation_runs_before_any_state_is_built() {
        let err = TofCalculator::new(298.15, &[0.0, 1.0], None).unwrap_err();
        assert_eq!(err.code(), "even-length");
        assert_eq!(err.info().context.get("energies").map(String::as_str), Some("2"));

        let labels = vec!["a".to_string(), "b".to_string()];
        let err = TofCalculator::new(298.15, &[0.0, 1.0, 2.0], Some(labels)).unwrap_err();
        assert_eq!(err.code(), "label-length-mismatch");
    }

    #[test]
    fn empty_profile_is_even() {
        let err = TofCalculator::new(298.15, &[], None).unwrap_err();
        assert!(matches!(err, TofError::Input(_)));
    }

    #[test]
    fn custom_labels_are_kept() {
        let labels = vec!["A".to_string(), "TS-A".to_string(), "B".to_string()];
        let calc = TofCalculator::new(298.15, &[0.0, 20.0, -5.0], Some(labels)).unwrap();
        assert_eq!(calc.tdi().as_tuple(), ("A", 0.0));
        assert_eq!(calc.tdts().as_tuple(), ("TS-A", 20.0));
        assert_eq!(calc.ground_tofs()[0].as_tuple(), ("A", 1.0));
    }
}
