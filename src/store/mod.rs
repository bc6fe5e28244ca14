//! Entity store: the two immutable tables, built and validated once.

pub mod loader;
pub mod table;
pub mod validate;

pub use table::Table;
pub use validate::{validate_records, ValidationReport};

use std::sync::OnceLock;

use serde::Serialize;

use crate::config::ValidationConfig;
use crate::error::Result;
use crate::model::{Agent, EntityKind, Guardian};
use crate::query;

/// Borrowed record of either kind, for kind-dispatched callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRef<'a> {
    Agent(&'a Agent),
    Guardian(&'a Guardian),
}

impl<'a> EntityRef<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::Agent(a) => &a.id,
            Self::Guardian(g) => &g.id,
        }
    }
}

/// Read-only holder of the Agent and Guardian tables.
///
/// There is no mutation API; a built store can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct EntityStore {
    agents: Table<Agent>,
    guardians: Table<Guardian>,
}

static BUILTIN: OnceLock<EntityStore> = OnceLock::new();

impl EntityStore {
    /// Validate both record lists and build the indexed tables.
    pub fn new(
        agents: Vec<Agent>,
        guardians: Vec<Guardian>,
        validation: &ValidationConfig,
    ) -> Result<Self> {
        let mut report = validate_records(&agents, validation.dangling_references);
        report.merge(validate_records(&guardians, validation.dangling_references));
        report.into_result()?;

        let store = Self {
            agents: Table::new(agents)?,
            guardians: Table::new(guardians)?,
        };
        log::debug!(
            "Entity store built: {} agents, {} guardians",
            store.agents.len(),
            store.guardians.len()
        );
        Ok(store)
    }

    /// Build a store from YAML sequences of agents and guardians.
    pub fn from_yaml(
        agents_yaml: &str,
        guardians_yaml: &str,
        validation: &ValidationConfig,
    ) -> Result<Self> {
        let agents = loader::parse_records(agents_yaml, "agents")?;
        let guardians = loader::parse_records(guardians_yaml, "guardians")?;
        Self::new(agents, guardians, validation)
    }

    /// Build a fresh store from the compiled-in dataset.
    pub fn load(validation: &ValidationConfig) -> Result<Self> {
        Self::new(loader::builtin_agents()?, loader::builtin_guardians()?, validation)
    }

    /// Process-wide store over the compiled-in dataset, built on first use.
    pub fn builtin() -> Result<&'static EntityStore> {
        if let Some(store) = BUILTIN.get() {
            return Ok(store);
        }
        let store = Self::load(&ValidationConfig::default())?;
        Ok(BUILTIN.get_or_init(|| store))
    }

    pub fn agents(&self) -> &Table<Agent> {
        &self.agents
    }

    pub fn guardians(&self) -> &Table<Guardian> {
        &self.guardians
    }

    /// All records of `kind` in declaration order.
    pub fn get_all(&self, kind: EntityKind) -> Vec<EntityRef<'_>> {
        match kind {
            EntityKind::Agent => self.agents.iter().map(EntityRef::Agent).collect(),
            EntityKind::Guardian => self.guardians.iter().map(EntityRef::Guardian).collect(),
        }
    }

    pub fn by_id(&self, kind: EntityKind, id: &str) -> Result<EntityRef<'_>> {
        match kind {
            EntityKind::Agent => self.agents.by_id(id).map(EntityRef::Agent),
            EntityKind::Guardian => self.guardians.by_id(id).map(EntityRef::Guardian),
        }
    }

    /// Related records of the same kind, in declared order, dangling ids skipped.
    pub fn related_of(&self, record: EntityRef<'_>) -> Vec<EntityRef<'_>> {
        match record {
            EntityRef::Agent(a) => query::related_of(&self.agents, a)
                .into_iter()
                .map(EntityRef::Agent)
                .collect(),
            EntityRef::Guardian(g) => query::related_of(&self.guardians, g)
                .into_iter()
                .map(EntityRef::Guardian)
                .collect(),
        }
    }
}
