//! Dataset loading from the YAML literals compiled into the binary.

use serde::de::DeserializeOwned;

use crate::error::{GridError, Result};
use crate::model::{Agent, Guardian};

pub(crate) const AGENTS_YAML: &str = include_str!("../../data/agents.yaml");
pub(crate) const GUARDIANS_YAML: &str = include_str!("../../data/guardians.yaml");

/// Parse a YAML sequence of records. `source` names the input in error messages.
pub fn parse_records<T: DeserializeOwned>(content: &str, source: &str) -> Result<Vec<T>> {
    serde_yaml_ng::from_str(content)
        .map_err(|e| GridError::Parse(format!("YAML parse error in {}: {}", source, e)))
}

pub fn builtin_agents() -> Result<Vec<Agent>> {
    parse_records(AGENTS_YAML, "data/agents.yaml")
}

pub fn builtin_guardians() -> Result<Vec<Guardian>> {
    parse_records(GUARDIANS_YAML, "data/guardians.yaml")
}
