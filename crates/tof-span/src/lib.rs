//! Energetic span analysis of catalytic cycles.
//!
//! A flat free-energy profile `[G0, TS1, G1, TS2, …, Gk]` is split into a
//! [`CatalyticCycle`], turned into an [`InterconversionTable`] at a given
//! temperature, and summarised by a [`TofCalculator`].

pub mod calculator;
pub mod cycle;
pub mod hash;
pub mod report;
pub mod table;

pub use calculator::{default_label, TofCalculator};
pub use cycle::CatalyticCycle;
pub use hash::stable_hash_string;
pub use report::TofReport;
pub use table::InterconversionTable;
pub use tof_core::{LabeledValue, PhysicalConstants, State, TofError};
