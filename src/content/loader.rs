//! Loader for the RON controller config at startup.

use std::fs;
use std::path::Path;

use ron::Options;
use serde::{Deserialize, Serialize};

use crate::combat::AttackTuning;
use crate::input::InputTuning;
use crate::movement::MovementTuning;

/// Every tunable the controller reads, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ControllerConfig {
    pub movement: MovementTuning,
    pub input: InputTuning,
    #[serde(default)]
    pub attack: AttackTuning,
}

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a controller config. `file` only labels errors.
pub fn parse_controller_config(
    contents: &str,
    file: &str,
) -> Result<ControllerConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load and parse the controller config at `path`.
pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_config(&contents, &file_name)
}
