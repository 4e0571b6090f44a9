//! Ground and transition state partition of an energy profile.

use tof_core::errors::{ErrorInfo, TofError};
use tof_core::{LabeledValue, State};

/// Ordered free-energy profile of one catalytic turnover.
///
/// Even positions are ground states (intermediates), odd positions are the
/// transition states connecting them. The first and last states are the
/// reactant and product ground states.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalyticCycle {
    states: Vec<State>,
    dg: f64,
}

impl CatalyticCycle {
    /// Builds a cycle from its states. Odd length is the caller's concern.
    pub fn new(states: Vec<State>) -> Result<Self, TofError> {
        let (first, last) = match (states.first(), states.last()) {
            (Some(first), Some(last)) => (first.energy(), last.energy()),
            _ => {
                return Err(TofError::Cycle(
                    ErrorInfo::new("empty-cycle", "a catalytic cycle needs at least one state")
                        .with_hint("supply reactant and product energies"),
                ))
            }
        };
        Ok(Self {
            dg: last - first,
            states,
        })
    }

    /// All states in cycle order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Ground states, i.e. every even position.
    pub fn ground_states(&self) -> impl ExactSizeIterator<Item = &State> + '_ {
        self.states.iter().step_by(2)
    }

    /// Transition states, i.e. every odd position.
    pub fn transition_states(&self) -> impl ExactSizeIterator<Item = &State> + '_ {
        self.states.iter().skip(1).step_by(2)
    }

    /// Ground state at step `index`.
    pub fn ground_state(&self, index: usize) -> Option<&State> {
        self.states.get(2 * index)
    }

    /// Transition state at step `index`.
    pub fn transition_state(&self, index: usize) -> Option<&State> {
        self.states.get(2 * index + 1)
    }

    /// First state of the cycle.
    pub fn reactant(&self) -> &State {
        &self.states[0]
    }

    /// Last state of the cycle.
    pub fn product(&self) -> &State {
        &self.states[self.states.len() - 1]
    }

    /// Number of transition states, equal to the number of elementary steps.
    pub fn n_steps(&self) -> usize {
        self.states.len() / 2
    }

    /// Net driving force of one turnover (product minus reactant).
    pub fn dg(&self) -> f64 {
        self.dg
    }

    /// `(label, energy)` for every state.
    pub fn state_pairs(&self) -> Vec<LabeledValue> {
        self.states.iter().map(State::as_pair).collect()
    }

    /// `(label, energy)` for every ground state.
    pub fn ground_state_pairs(&self) -> Vec<LabeledValue> {
        self.ground_states().map(State::as_pair).collect()
    }

    /// `(label, energy)` for every transition state.
    pub fn transition_state_pairs(&self) -> Vec<LabeledValue> {
        self.transition_states().map(State::as_pair).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(energies: &[f64]) -> CatalyticCycle {
        let states = energies
            .iter()
            .enumerate()
            .map(|(idx, energy)| State::new(format!("s{idx}"), *energy))
            .collect();
        CatalyticCycle::new(states).unwrap()
    }

    #[test]
    fn partitions_by_parity() {
        let cycle = cycle(&[0.0, 15.0, -7.0, 8.0, 5.0]);
        let ground: Vec<_> = cycle.ground_states().map(State::label).collect();
        let ts: Vec<_> = cycle.transition_states().map(State::label).collect();
        assert_eq!(ground, vec!["s0", "s2", "s4"]);
        assert_eq!(ts, vec!["s1", "s3"]);
        assert_eq!(cycle.n_steps(), 2);
        assert_eq!(cycle.transition_state(1).map(State::energy), Some(8.0));
        assert!(cycle.transition_state(2).is_none());
    }

    #[test]
    fn driving_force_is_product_minus_reactant() {
        let cycle = cycle(&[2.0, 15.0, -7.0]);
        assert_eq!(cycle.dg(), -9.0);
        assert_eq!(cycle.reactant().label(), "s0");
        assert_eq!(cycle.product().label(), "s2");
    }

    #[test]
    fn single_state_is_both_reactant_and_product() {
        let cycle = cycle(&[3.0]);
        assert_eq!(cycle.reactant(), cycle.product());
        assert_eq!(cycle.dg(), 0.0);
        assert_eq!(cycle.n_steps(), 0);
        assert_eq!(cycle.transition_states().len(), 0);
    }

    #[test]
    fn empty_cycle_is_rejected() {
        let err = CatalyticCycle::new(Vec::new()).unwrap_err();
        assert_eq!(err.code(), "empty-cycle");
    }

    #[test]
    fn pair_projections_keep_cycle_order() {
        let cycle = cycle(&[0.0, 1.0, 2.0]);
        let pairs = cycle.state_pairs();
        assert_eq!(pairs[1].as_tuple(), ("s1", 1.0));
        assert_eq!(cycle.ground_state_pairs().len(), 2);
        assert_eq!(cycle.transition_state_pairs()[0].as_tuple(), ("s1", 1.0));
    }
}
