//! `orgmerge run` — config-driven multi-year archive compilation.

use std::path::{Path, PathBuf};

use orgmerge_engine::{parse_year_document, CompileConfig, CompileInput, OrgRecord};

use crate::exit_codes::{
    EXIT_COMPILE_INVALID_CONFIG, EXIT_COMPILE_PARSE, EXIT_COMPILE_READ, EXIT_ERROR,
};
use crate::CliError;

fn compile_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError { code, message: msg.into(), hint: None }
}

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_override: Option<PathBuf>,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| compile_err(EXIT_COMPILE_READ, format!("cannot read config: {e}")))?;

    let config = CompileConfig::from_toml(&config_str)
        .map_err(|e| compile_err(EXIT_COMPILE_INVALID_CONFIG, e.to_string()))?;

    // Resolve data and output paths relative to the config file's directory.
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    // Load every year's document up front, in configured order. Any read
    // or parse failure aborts the whole run before anything is written.
    let mut years: Vec<(i32, Vec<OrgRecord>)> = Vec::with_capacity(config.years.len());
    for &year in &config.years {
        let path = base_dir.join(config.year_file(year));
        let json = std::fs::read_to_string(&path).map_err(|e| {
            compile_err(
                EXIT_COMPILE_READ,
                format!("year {year}: cannot read {}: {e}", path.display()),
            )
        })?;
        let records = parse_year_document(&json, year)
            .map_err(|e| compile_err(EXIT_COMPILE_PARSE, e.to_string()))?;
        years.push((year, records));
    }

    let snapshot = orgmerge_engine::run(CompileInput { years });

    let json_str = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| compile_err(EXIT_ERROR, format!("JSON serialization error: {e}")))?;

    let output_path = output_override.unwrap_or_else(|| base_dir.join(&config.output));
    // A write failure is reported but does not fail the run: no retry, no
    // atomic replace, no distinct exit status (see exit_codes.rs).
    match std::fs::write(&output_path, &json_str) {
        Ok(()) => eprintln!("wrote {}", output_path.display()),
        Err(e) => eprintln!("error: cannot write {}: {e}", output_path.display()),
    }

    if json_output {
        println!("{json_str}");
    }

    eprintln!(
        "'{}': {} orgs across {} year(s) — {} categories, {} topics, {} technologies (run at {})",
        config.name,
        snapshot.org_data.len(),
        config.years.len(),
        snapshot.totalcategories.len(),
        snapshot.total_topics.len(),
        snapshot.total_technologies.len(),
        chrono::Utc::now().to_rfc3339(),
    );

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| compile_err(EXIT_COMPILE_READ, format!("cannot read config: {e}")))?;

    match CompileConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: '{}' with {} year(s), {} -> {}",
                config.name,
                config.years.len(),
                config.data_dir,
                config.output,
            );
            Ok(())
        }
        Err(e) => Err(compile_err(EXIT_COMPILE_INVALID_CONFIG, e.to_string())),
    }
}
