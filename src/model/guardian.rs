use serde::{Deserialize, Serialize};

use super::{EntityKind, Link, Record, Stat};

/// One of the Guardian archetypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub id: String,
    pub name: String,
    pub title: String,
    pub domain: String,
    pub description: String,
    pub manifestation: String,
    pub image: String,
    pub color: String,
    pub gradient: String,
    pub visual_vibe: String,
    pub products: Vec<Product>,
    pub user_benefit: String,
    pub stats: Vec<Stat>,
    pub links: Vec<Link>,
    pub related_guardians: Vec<String>,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
}

impl Record for Guardian {
    const KIND: EntityKind = EntityKind::Guardian;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.domain
    }

    fn relation_ids(&self) -> &[String] {
        &self.related_guardians
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
            ("domain", self.domain.as_str()),
            ("description", self.description.as_str()),
            ("manifestation", self.manifestation.as_str()),
            ("visualVibe", self.visual_vibe.as_str()),
            ("userBenefit", self.user_benefit.as_str()),
            ("quote", self.quote.as_str()),
        ]
    }

    fn check(&self) -> Vec<String> {
        self.products
            .iter()
            .filter(|p| p.name.trim().is_empty())
            .map(|_| "product with empty name".to_string())
            .collect()
    }
}
