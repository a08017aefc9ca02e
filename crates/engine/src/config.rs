use serde::Deserialize;

use crate::error::CompileError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    pub name: String,
    /// Years to process, in processing order. Must be strictly monotone
    /// (ascending or descending): the merge policy compares each incoming
    /// year against the last one recorded, so a shuffled order would make
    /// "newest" meaningless.
    pub years: Vec<i32>,
    /// Directory holding one `<year>.json` document per year.
    pub data_dir: String,
    /// Path the compiled snapshot is written to.
    pub output: String,
}

impl CompileConfig {
    pub fn from_toml(input: &str) -> Result<Self, CompileError> {
        let config: CompileConfig =
            toml::from_str(input).map_err(|e| CompileError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CompileError> {
        if self.years.is_empty() {
            return Err(CompileError::ConfigValidation(
                "at least one year is required".into(),
            ));
        }

        for window in self.years.windows(2) {
            if window[0] == window[1] {
                return Err(CompileError::ConfigValidation(format!(
                    "duplicate year {}",
                    window[0]
                )));
            }
        }

        let ascending = self.years.windows(2).all(|w| w[0] < w[1]);
        let descending = self.years.windows(2).all(|w| w[0] > w[1]);
        if !ascending && !descending {
            return Err(CompileError::ConfigValidation(
                "years must be strictly ascending or strictly descending".into(),
            ));
        }

        Ok(())
    }

    /// Relative path of one year's source document under `data_dir`.
    pub fn year_file(&self, year: i32) -> String {
        format!("{}/{year}.json", self.data_dir)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
