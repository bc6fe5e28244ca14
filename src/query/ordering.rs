//! Category ordering: stable sort of records by a precedence list of layers.

use std::collections::HashMap;

use crate::config::{UnknownLayerPlacement, DEFAULT_LAYER_PRECEDENCE};
use crate::model::{Agent, Record};

/// Ranked list of layer names plus the placement rule for unlisted layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerPrecedence {
    layers: Vec<String>,
    unknown: UnknownLayerPlacement,
}

impl LayerPrecedence {
    pub fn new(layers: Vec<String>, unknown: UnknownLayerPlacement) -> Self {
        Self { layers, unknown }
    }

    /// Index of `layer` in the precedence list.
    pub fn rank(&self, layer: &str) -> Option<usize> {
        self.layers.iter().position(|l| l == layer)
    }

    /// Sort key: recognized layers keep their relative rank, unknown layers
    /// go before or after all of them.
    fn sort_key(&self, layer: &str) -> usize {
        match (self.rank(layer), self.unknown) {
            (Some(rank), UnknownLayerPlacement::End) => rank,
            (Some(rank), UnknownLayerPlacement::Start) => rank + 1,
            (None, UnknownLayerPlacement::End) => self.layers.len(),
            (None, UnknownLayerPlacement::Start) => 0,
        }
    }
}

impl Default for LayerPrecedence {
    fn default() -> Self {
        Self::new(
            DEFAULT_LAYER_PRECEDENCE.iter().map(|s| s.to_string()).collect(),
            UnknownLayerPlacement::End,
        )
    }
}

impl<S: Into<String>> FromIterator<S> for LayerPrecedence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(
            iter.into_iter().map(Into::into).collect(),
            UnknownLayerPlacement::End,
        )
    }
}

/// Stable sort of `records` by category rank. Input order breaks ties.
pub fn order_by_category<'a, T, I>(records: I, precedence: &LayerPrecedence) -> Vec<&'a T>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ordered: Vec<&'a T> = records.into_iter().collect();
    for record in &ordered {
        if precedence.rank(record.category()).is_none() {
            log::warn!(
                "{} '{}' has unrecognized category '{}', placing it at the {}",
                T::KIND,
                record.id(),
                record.category(),
                match precedence.unknown {
                    UnknownLayerPlacement::Start => "start",
                    UnknownLayerPlacement::End => "end",
                }
            );
        }
    }
    ordered.sort_by_key(|record| precedence.sort_key(record.category()));
    ordered
}

/// Agents ordered by `layer` for the index page.
pub fn order_by_layer<'a, I>(agents: I, precedence: &LayerPrecedence) -> Vec<&'a Agent>
where
    I: IntoIterator<Item = &'a Agent>,
{
    order_by_category(agents, precedence)
}

/// Ordered records split into runs sharing a category, in precedence order.
pub fn group_by_category<'a, T, I>(
    records: I,
    precedence: &LayerPrecedence,
) -> Vec<(&'a str, Vec<&'a T>)>
where
    T: Record + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let ordered = order_by_category(records, precedence);

    // Unknown categories share one sort key, so they are grouped by first appearance.
    let mut groups: Vec<(&'a str, Vec<&'a T>)> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    for record in ordered {
        let category = record.category();
        match slots.get(category) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                slots.insert(category, groups.len());
                groups.push((category, vec![record]));
            }
        }
    }
    groups
}

pub fn group_by_layer<'a, I>(agents: I, precedence: &LayerPrecedence) -> Vec<(&'a str, Vec<&'a Agent>)>
where
    I: IntoIterator<Item = &'a Agent>,
{
    group_by_category(agents, precedence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_agent as agent;
    use crate::store::EntityStore;

    fn ids(records: &[&Agent]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_order_builtin_agents() {
        let store = EntityStore::builtin().unwrap();
        let precedence: LayerPrecedence =
            ["SOUL", "MIND", "META", "BODY", "SOUL/BODY"].into_iter().collect();
        let ordered = order_by_layer(store.agents(), &precedence);
        assert_eq!(
            ids(&ordered),
            vec!["woo", "tsatse", "code-conduit", "mo", "rad-x", "writer"]
        );
    }

    #[test]
    fn test_order_is_deterministic() {
        let store = EntityStore::builtin().unwrap();
        let precedence = LayerPrecedence::default();
        let first = order_by_layer(store.agents(), &precedence);
        let second = order_by_layer(store.agents(), &precedence);
        assert_eq!(ids(&first), ids(&second));
        // re-ordering an ordered list is a no-op
        let again = order_by_layer(first.iter().copied(), &precedence);
        assert_eq!(ids(&again), ids(&first));
    }

    #[test]
    fn test_order_is_stable_within_layer() {
        let agents = vec![
            agent("b1", "BODY", &[]),
            agent("s1", "SOUL", &[]),
            agent("b2", "BODY", &[]),
            agent("s2", "SOUL", &[]),
            agent("b3", "BODY", &[]),
        ];
        let ordered = order_by_layer(&agents, &LayerPrecedence::default());
        assert_eq!(ids(&ordered), vec!["s1", "s2", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_unknown_layer_placed_at_end_by_default() {
        let agents = vec![
            agent("x", "VOID", &[]),
            agent("mo", "BODY", &[]),
            agent("woo", "SOUL", &[]),
        ];
        let ordered = order_by_layer(&agents, &LayerPrecedence::default());
        assert_eq!(ids(&ordered), vec!["woo", "mo", "x"]);
    }

    #[test]
    fn test_unknown_layer_placed_at_start() {
        let agents = vec![
            agent("mo", "BODY", &[]),
            agent("x", "VOID", &[]),
            agent("woo", "SOUL", &[]),
        ];
        let precedence = LayerPrecedence::new(
            vec!["SOUL".to_string(), "BODY".to_string()],
            UnknownLayerPlacement::Start,
        );
        let ordered = order_by_layer(&agents, &precedence);
        assert_eq!(ids(&ordered), vec!["x", "woo", "mo"]);
    }

    #[test]
    fn test_order_does_not_touch_input() {
        let agents = vec![agent("mo", "BODY", &[]), agent("woo", "SOUL", &[])];
        let _ = order_by_layer(&agents, &LayerPrecedence::default());
        assert_eq!(agents[0].id, "mo");
    }

    #[test]
    fn test_group_by_layer_builtin() {
        let store = EntityStore::builtin().unwrap();
        let groups = group_by_layer(store.agents(), &LayerPrecedence::default());
        let layers: Vec<_> = groups.iter().map(|(layer, _)| *layer).collect();
        assert_eq!(layers, vec!["SOUL", "MIND", "META", "BODY", "SOUL/BODY"]);
        let body = &groups[3].1;
        assert_eq!(ids(body), vec!["mo", "rad-x"]);
    }

    #[test]
    fn test_group_unknown_layers_separately() {
        let agents = vec![
            agent("a", "VOID", &[]),
            agent("b", "ECHO", &[]),
            agent("c", "VOID", &[]),
            agent("d", "SOUL", &[]),
        ];
        let groups = group_by_layer(&agents, &LayerPrecedence::default());
        let layers: Vec<_> = groups.iter().map(|(layer, _)| *layer).collect();
        assert_eq!(layers, vec!["SOUL", "VOID", "ECHO"]);
        assert_eq!(ids(&groups[1].1), vec!["a", "c"]);
    }

    #[test]
    fn test_guardians_by_domain() {
        let store = EntityStore::builtin().unwrap();
        let precedence: LayerPrecedence = ["Knowledge", "Health"].into_iter().collect();
        let ordered = order_by_category(store.guardians(), &precedence);
        let ids: Vec<_> = ordered.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["archivist", "healer", "sentinel", "balancer", "flameborn"]);
    }
}
