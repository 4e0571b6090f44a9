use std::error::Error;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use tof_core::{to_canonical_json_pretty, to_yaml_string};
use tof_span::TofReport;
use tracing::info;

/// Serialisation format for emitted reports.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

pub fn render(report: &TofReport, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let text = match format {
        OutputFormat::Json => to_canonical_json_pretty(report)?,
        OutputFormat::Yaml => to_yaml_string(report)?,
    };
    Ok(text)
}

/// Writes the report to `out`, or to stdout when no path is given.
pub fn emit(
    report: &TofReport,
    format: OutputFormat,
    out: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let text = render(report, format)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
            info!(path = %path.display(), "wrote report");
        }
        None => println!("{text}"),
    }
    Ok(())
}
