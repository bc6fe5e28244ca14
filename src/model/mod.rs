//! Entity schema: Agents and Guardians, plus the sub-records they share.
//!
//! Both kinds are flat, self-contained records keyed by a stable string id.
//! Relation lists hold ids of records of the same kind only.

mod agent;
mod guardian;

pub use agent::{Ability, Agent, Feature};
pub use guardian::{Guardian, Product};

#[cfg(test)]
pub(crate) use agent::tests::agent as test_agent;
#[cfg(test)]
pub(crate) use guardian::tests::guardian as test_guardian;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// The two entity kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Agent,
    Guardian,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Agent, EntityKind::Guardian];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Guardian => "guardian",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = GridError;

    /// Accepts singular or plural, any case ("agent", "Agents", "guardian").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agent" | "agents" => Ok(Self::Agent),
            "guardian" | "guardians" => Ok(Self::Guardian),
            _ => Err(GridError::UnknownKind(s.to_string())),
        }
    }
}

/// Label/value pair shown in stat panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Internal,
    External,
}

/// Outbound link attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: LinkType,
}

/// Common read-only view over both entity kinds.
///
/// The store, the validator and the query layer are written against this
/// trait so that Agents and Guardians share one implementation.
pub trait Record {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    /// Grouping tag: `layer` for agents, `domain` for guardians.
    fn category(&self) -> &str;

    /// Declared related ids, in authored order.
    fn relation_ids(&self) -> &[String];

    fn links(&self) -> &[Link];

    fn stats(&self) -> &[Stat];

    /// `(field name, value)` pairs that must be non-empty.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// Kind-specific range checks. Each entry is a human-readable reason.
    fn check(&self) -> Vec<String> {
        Vec::new()
    }
}
