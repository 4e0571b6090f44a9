//! Energetic span matrix and the TOF descriptors derived from it.

use nalgebra::DMatrix;
use tof_core::errors::{ErrorInfo, TofError};
use tof_core::{PhysicalConstants, State};
use tracing::{debug, warn};

use crate::cycle::CatalyticCycle;

/// Energetic span matrix of a catalytic cycle at a fixed temperature.
///
/// Entry `(i, j)` is the Boltzmann weight of the effective barrier between
/// ground state `i` and transition state `j`. Pairs with `j >= i` lie inside
/// one forward turnover and additionally pay the driving force `dg`; pairs
/// with `j < i` wrap into the next turnover and do not.
#[derive(Debug, Clone, PartialEq)]
pub struct InterconversionTable {
    matrix: DMatrix<f64>,
    temperature: f64,
    constants: PhysicalConstants,
    dg: f64,
    total: f64,
    ground_tofs: Vec<f64>,
    ts_tofs: Vec<f64>,
    tdi_index: usize,
    tdts_index: usize,
    tdi: State,
    tdts: State,
}

impl InterconversionTable {
    /// Builds the table with the default kcal/mol constants.
    pub fn new(cycle: &CatalyticCycle, temperature: f64) -> Result<Self, TofError> {
        Self::with_constants(cycle, temperature, PhysicalConstants::default())
    }

    /// Builds the table with an explicit unit system.
    pub fn with_constants(
        cycle: &CatalyticCycle,
        temperature: f64,
        constants: PhysicalConstants,
    ) -> Result<Self, TofError> {
        let n_steps = cycle.n_steps();
        if n_steps == 0 {
            return Err(TofError::Cycle(
                ErrorInfo::new(
                    "no-transition-states",
                    "cycle has no transition states, the energy span is undefined",
                )
                .with_context("states", cycle.states().len())
                .with_hint("provide at least ground, transition and ground energies"),
            ));
        }
        if temperature <= 0.0 || temperature.is_nan() {
            warn!(temperature, "non-positive temperature, results are not physical");
        }

        let rt = constants.thermal_energy(temperature);
        let dg = cycle.dg();
        let ground: Vec<&State> = cycle.ground_states().take(n_steps).collect();
        let transition: Vec<&State> = cycle.transition_states().collect();

        let mut matrix = DMatrix::<f64>::zeros(n_steps, n_steps);
        for (i, ground_state) in ground.iter().enumerate() {
            for (j, ts) in transition.iter().enumerate() {
                let barrier = ts.energy() - ground_state.energy();
                let effective = if j >= i { barrier - dg } else { barrier };
                matrix[(i, j)] = (effective / rt).exp();
            }
        }

        let total = matrix.sum();
        if !total.is_finite() || total == 0.0 {
            warn!(total, "interconversion table total is degenerate");
        }
        let ground_tofs: Vec<f64> = (0..n_steps)
            .map(|i| matrix.row(i).sum() / total)
            .collect();
        let ts_tofs: Vec<f64> = (0..n_steps)
            .map(|j| matrix.column(j).sum() / total)
            .collect();

        let tdi_index = first_max_index(&ground_tofs);
        let tdts_index = first_max_index(&ts_tofs);
        debug!(n_steps, dg, total, tdi_index, tdts_index, "built interconversion table");

        Ok(Self {
            tdi: ground[tdi_index].clone(),
            tdts: transition[tdts_index].clone(),
            matrix,
            temperature,
            constants,
            dg,
            total,
            ground_tofs,
            ts_tofs,
            tdi_index,
            tdts_index,
        })
    }

    /// The `k × k` span matrix, rows indexed by ground state.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Number of elementary steps `k`.
    pub fn n_steps(&self) -> usize {
        self.matrix.nrows()
    }

    /// Temperature in kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Unit system the table was built with.
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Driving force of the underlying cycle.
    pub fn dg(&self) -> f64 {
        self.dg
    }

    /// Sum of every matrix entry.
    pub fn total_sum(&self) -> f64 {
        self.total
    }

    /// Sum of row `index`, or `None` when out of range.
    pub fn row_sum(&self, index: usize) -> Option<f64> {
        (index < self.n_steps()).then(|| self.matrix.row(index).sum())
    }

    /// Sum of column `index`, or `None` when out of range.
    pub fn col_sum(&self, index: usize) -> Option<f64> {
        (index < self.n_steps()).then(|| self.matrix.column(index).sum())
    }

    /// Degree of TOF control of each ground state, in cycle order.
    pub fn ground_tofs(&self) -> &[f64] {
        &self.ground_tofs
    }

    /// Degree of TOF control of each transition state, in cycle order.
    pub fn ts_tofs(&self) -> &[f64] {
        &self.ts_tofs
    }

    /// TOF-determining intermediate. Ties resolve to the earliest ground state.
    pub fn tdi(&self) -> &State {
        &self.tdi
    }

    /// TOF-determining transition state. Ties resolve to the earliest transition state.
    pub fn tdts(&self) -> &State {
        &self.tdts
    }

    /// Position of the TDI among the ground states.
    pub fn tdi_index(&self) -> usize {
        self.tdi_index
    }

    /// Position of the TDTS among the transition states.
    pub fn tdts_index(&self) -> usize {
        self.tdts_index
    }

    /// Turnover frequency in s⁻¹.
    ///
    /// `k_B T / h · (exp(-dg / RT) - 1) / total`. Not clamped: a zero total
    /// yields an infinite or NaN result.
    pub fn tof(&self) -> f64 {
        let rt = self.constants.thermal_energy(self.temperature);
        self.constants.kb_over_h * self.temperature * ((-self.dg / rt).exp() - 1.0) / self.total
    }
}

/// Index of the first maximum. NaN never wins; an all-NaN slice yields 0.
pub(crate) fn first_max_index(values: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx).unwrap_or(0)
}
