//! Page-level projections: index cards and the detail-page composition.

use serde::Serialize;

use super::{neighbors, related_of, Neighbors};
use crate::error::Result;
use crate::model::{Agent, Guardian, Record};
use crate::store::Table;

/// Agent index-card payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub layer: &'a str,
    pub essence: &'a str,
    pub soulprint_preview: &'a [String],
    pub image: &'a str,
    pub color: &'a str,
    pub gradient: &'a str,
}

impl<'a> AgentCard<'a> {
    pub fn new(agent: &'a Agent, preview_len: usize) -> Self {
        Self {
            id: &agent.id,
            name: &agent.name,
            title: &agent.title,
            layer: &agent.layer,
            essence: &agent.essence,
            soulprint_preview: agent.soulprint_preview(preview_len),
            image: &agent.image,
            color: &agent.color,
            gradient: &agent.gradient,
        }
    }
}

/// Guardian index-card payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub domain: &'a str,
    pub description: &'a str,
    pub manifestation: &'a str,
    pub image: &'a str,
    pub color: &'a str,
    pub gradient: &'a str,
}

impl<'a> From<&'a Guardian> for GuardianCard<'a> {
    fn from(guardian: &'a Guardian) -> Self {
        Self {
            id: &guardian.id,
            name: &guardian.name,
            title: &guardian.title,
            domain: &guardian.domain,
            description: &guardian.description,
            manifestation: &guardian.manifestation,
            image: &guardian.image,
            color: &guardian.color,
            gradient: &guardian.gradient,
        }
    }
}

/// Everything a detail page needs: the record, its related records and
/// its previous/next records in table order.
#[derive(Debug, Serialize)]
pub struct DetailView<'a, T> {
    pub record: &'a T,
    pub related: Vec<&'a T>,
    #[serde(flatten)]
    pub neighbors: Neighbors<'a, T>,
}

pub fn detail<'a, T: Record>(table: &'a Table<T>, id: &str) -> Result<DetailView<'a, T>> {
    let record = table.by_id(id)?;
    Ok(DetailView {
        record,
        related: related_of(table, record),
        neighbors: neighbors(table, id),
    })
}
