use std::error::Error;

use clap::Args;
use tof_core::{PhysicalConstants, ProfileConfig};
use tof_span::TofReport;

use super::compute::build_report;
use super::output::{emit, OutputFormat};

/// Three-step cycle with an exergonic driving force of -10 kcal/mol.
const DEMO_ENERGIES: [f64; 7] = [0.0, 15.0, -7.0, 8.0, 5.0, 11.5, -10.0];

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Temperature in kelvin.
    #[arg(long, default_value_t = 298.15)]
    pub temperature: f64,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

fn demo_report(temperature: f64) -> Result<TofReport, Box<dyn Error>> {
    build_report(ProfileConfig {
        temperature,
        energies: DEMO_ENERGIES.to_vec(),
        labels: None,
        constants: PhysicalConstants::default(),
    })
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let report = demo_report(args.temperature)?;
    emit(&report, args.format, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_cycle_is_limited_by_g2_and_ts3() {
        let report = demo_report(298.15).unwrap();
        assert_eq!(report.states.len(), DEMO_ENERGIES.len());
        assert_eq!(report.tdi.as_tuple(), ("g2", -7.0));
        assert_eq!(report.tdts.as_tuple(), ("ts3", 11.5));
        assert_eq!(report.energy_span, 18.5);
    }

    #[test]
    fn demo_run_emits_both_formats() {
        for format in [OutputFormat::Json, OutputFormat::Yaml] {
            let args = DemoArgs {
                temperature: 298.15,
                format,
            };
            run(&args).unwrap();
        }
    }
}
