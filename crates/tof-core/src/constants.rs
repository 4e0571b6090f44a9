//! Physical constants consumed by the interconversion table.

use serde::{Deserialize, Serialize};

/// Ideal gas constant in kcal·mol⁻¹·K⁻¹.
pub const IDEAL_GAS_CONSTANT: f64 = 0.0019872;

/// Boltzmann over Planck constant in s⁻¹·K⁻¹.
pub const KB_OVER_H: f64 = 2.08366e10;

fn default_gas_constant() -> f64 {
    IDEAL_GAS_CONSTANT
}

fn default_kb_over_h() -> f64 {
    KB_OVER_H
}

/// Unit system used when converting energies into Boltzmann weights.
///
/// The defaults assume energies in kcal/mol. Supplying a gas constant in
/// kJ·mol⁻¹·K⁻¹ switches the whole computation to kJ/mol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Ideal gas constant `R` in energy units per mole per kelvin.
    #[serde(default = "default_gas_constant")]
    pub gas_constant: f64,
    /// Ratio `k_B / h` in s⁻¹·K⁻¹.
    #[serde(default = "default_kb_over_h")]
    pub kb_over_h: f64,
}

impl PhysicalConstants {
    /// Returns `R·T` for the given temperature.
    pub fn thermal_energy(&self, temperature: f64) -> f64 {
        self.gas_constant * temperature
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gas_constant: default_gas_constant(),
            kb_over_h: default_kb_over_h(),
        }
    }
}
