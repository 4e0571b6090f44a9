use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tof_core::{parse_energy_list, parse_label_list, PhysicalConstants, ProfileConfig};
use tof_span::{TofCalculator, TofReport};

use super::output::{emit, OutputFormat};

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// YAML or JSON profile with `temperature`, `energies` and optional `labels`.
    #[arg(long, conflicts_with_all = ["energies", "labels", "temperature"])]
    pub config: Option<PathBuf>,
    /// Comma separated relative free energies, e.g. `0,15,-7`.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "config")]
    pub energies: Option<String>,
    /// Comma separated state labels, one per energy.
    #[arg(long)]
    pub labels: Option<String>,
    /// Temperature in kelvin.
    #[arg(long)]
    pub temperature: Option<f64>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

fn load_profile(args: &ComputeArgs) -> Result<ProfileConfig, Box<dyn Error>> {
    if let Some(path) = &args.config {
        return Ok(ProfileConfig::load(path)?);
    }
    let Some(raw) = args.energies.as_deref() else {
        return Err("--energies is required unless --config is set".into());
    };
    Ok(ProfileConfig {
        temperature: args.temperature.unwrap_or(298.15),
        energies: parse_energy_list(raw)?,
        labels: args.labels.as_deref().map(parse_label_list),
        constants: PhysicalConstants::default(),
    })
}

pub fn build_report(profile: ProfileConfig) -> Result<TofReport, Box<dyn Error>> {
    let calculator = TofCalculator::with_constants(
        profile.temperature,
        &profile.energies,
        profile.labels,
        profile.constants,
    )?;
    Ok(calculator.all())
}

pub fn run(args: &ComputeArgs) -> Result<(), Box<dyn Error>> {
    let profile = load_profile(args)?;
    let report = build_report(profile)?;
    emit(&report, args.format, args.out.as_deref())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args() -> ComputeArgs {
        ComputeArgs {
            config: None,
            energies: None,
            labels: None,
            temperature: None,
            out: None,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn flags_build_a_profile() {
        let mut args = args();
        args.energies = Some("0,20,-5".into());
        args.labels = Some("A,TS,B".into());
        let profile = load_profile(&args).unwrap();
        assert_eq!(profile.temperature, 298.15);
        assert_eq!(profile.labels, Some(vec!["A".into(), "TS".into(), "B".into()]));
        let report = build_report(profile).unwrap();
        assert_eq!(report.tdts.label, "TS");
    }

    #[test]
    fn config_file_is_loaded_and_written() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("profile.yaml");
        fs::write(&config, "temperature: 298.15\nenergies: [0, 15, -7, 8, 5, 11.5, -10]\n").unwrap();
        let mut args = args();
        args.config = Some(config);
        args.out = Some(dir.path().join("out/report.json"));
        run(&args).unwrap();

        let written = fs::read_to_string(dir.path().join("out/report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["TDI"], serde_json::json!(["g2", -7.0]));
        assert_eq!(value["TDTS"], serde_json::json!(["ts3", 11.5]));
    }

    #[test]
    fn even_profile_surfaces_the_library_error() {
        let mut args = args();
        args.energies = Some("0,1".into());
        let profile = load_profile(&args).unwrap();
        let err = build_report(profile).unwrap_err();
        assert!(err.to_string().contains("even-length"));
    }

    #[test]
    fn doubled_comma_in_energies_is_rejected() {
        let mut args = args();
        args.energies = Some("0,,15,-7".into());
        let err = load_profile(&args).unwrap_err();
        assert!(err.to_string().contains("energy-parse"));
        assert!(err.to_string().contains("position=1"));
    }
}
