use serde::{Deserialize, Serialize};

use super::{EntityKind, Link, Record, Stat};

/// Highest meaningful ability level (rendered as a percentage bar).
pub const MAX_ABILITY_LEVEL: u32 = 100;

/// One of the named AI-role entities of the Grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub title: String,
    /// Architectural layer, e.g. `SOUL`, `MIND`, `BODY`.
    pub layer: String,
    pub layer_code: String,
    pub essence: String,
    /// Authored order matters: the first entries double as the card preview.
    pub soulprint: Vec<String>,
    pub oath: String,
    pub domains: Vec<String>,
    pub image: String,
    pub color: String,
    pub gradient: String,
    pub features: Vec<Feature>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub links: Vec<Link>,
    pub related_agents: Vec<String>,
    pub quote: String,
    pub card_bg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Icon name, resolved by the renderer.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub level: u32,
}

impl Agent {
    /// First `n` soulprint traits, fewer if the agent has less.
    pub fn soulprint_preview(&self, n: usize) -> &[String] {
        &self.soulprint[..n.min(self.soulprint.len())]
    }
}

impl Record for Agent {
    const KIND: EntityKind = EntityKind::Agent;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.layer
    }

    fn relation_ids(&self) -> &[String] {
        &self.related_agents
    }

    fn links(&self) -> &[Link] {
        &self.links
    }

    fn stats(&self) -> &[Stat] {
        &self.stats
    }

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("title", self.title.as_str()),
            ("layer", self.layer.as_str()),
            ("layerCode", self.layer_code.as_str()),
            ("essence", self.essence.as_str()),
            ("oath", self.oath.as_str()),
            ("quote", self.quote.as_str()),
        ]
    }

    fn check(&self) -> Vec<String> {
        self.abilities
            .iter()
            .filter(|a| a.level > MAX_ABILITY_LEVEL)
            .map(|a| {
                format!(
                    "ability '{}' level {} exceeds {}",
                    a.name, a.level, MAX_ABILITY_LEVEL
                )
            })
            .collect()
    }
}
