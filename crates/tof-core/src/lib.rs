#![deny(missing_docs)]
#![doc = "Core records, physical constants and error types for energetic span analysis."]

pub mod config;
pub mod constants;
pub mod errors;
pub mod serde;
pub mod state;

pub use config::{parse_energy_list, parse_label_list, ProfileConfig};
pub use constants::{PhysicalConstants, IDEAL_GAS_CONSTANT, KB_OVER_H};
pub use errors::{ErrorInfo, TofError};
pub use self::serde::{
    from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_canonical_json_pretty,
    to_yaml_string,
};
pub use state::{LabeledValue, State};
