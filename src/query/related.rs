//! Relation resolution: one hop over a record's declared related ids.

use crate::model::Record;
use crate::store::Table;

/// Resolve `record`'s related ids against `table`.
///
/// Keeps declared order and multiplicity. Ids with no record are skipped,
/// so the result is never longer than the declared list. A self-reference
/// resolves like any other id.
pub fn related_of<'a, T: Record>(table: &'a Table<T>, record: &T) -> Vec<&'a T> {
    record
        .relation_ids()
        .iter()
        .filter_map(|id| {
            let resolved = table.get(id);
            if resolved.is_none() {
                log::debug!(
                    "Skipping unresolved related {} '{}' on '{}'",
                    T::KIND,
                    id,
                    record.id()
                );
            }
            resolved
        })
        .collect()
}

/// `(source id, missing id)` for every relation id that does not resolve.
pub fn dangling_references<T: Record>(table: &Table<T>) -> Vec<(&str, &str)> {
    table
        .iter()
        .flat_map(|record| {
            record
                .relation_ids()
                .iter()
                .filter(|id| !table.contains(id))
                .map(move |id| (record.id(), id.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{test_agent as agent, Agent};
    use crate::store::EntityStore;

    fn ids<T: Record>(records: &[&T]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_related_of_mo() {
        let store = EntityStore::builtin().unwrap();
        let mo = store.agents().by_id("mo").unwrap();
        let related = related_of(store.agents(), mo);
        assert_eq!(ids(&related), vec!["woo", "code-conduit", "writer"]);
    }

    #[test]
    fn test_related_skips_dangling_and_keeps_order() {
        let store = EntityStore::builtin().unwrap();
        let rad_x = store.agents().by_id("rad-x").unwrap();
        // declared: tsatse, mo, sentinel (a guardian)
        assert_eq!(ids(&related_of(store.agents(), rad_x)), vec!["tsatse", "mo"]);

        let writer = store.agents().by_id("writer").unwrap();
        assert_eq!(ids(&related_of(store.agents(), writer)), vec!["woo", "mo"]);
    }

    #[test]
    fn test_related_length_bound_and_order() {
        let store = EntityStore::builtin().unwrap();
        for agent in store.agents() {
            let related = related_of(store.agents(), agent);
            assert!(related.len() <= agent.related_agents.len());
            let expected: Vec<_> = agent
                .related_agents
                .iter()
                .filter(|id| store.agents().contains(id))
                .cloned()
                .collect();
            assert_eq!(ids(&related), expected);
        }
        for guardian in store.guardians() {
            let related = related_of(store.guardians(), guardian);
            assert!(related.len() <= guardian.related_guardians.len());
        }
    }

    #[test]
    fn test_related_keeps_duplicates_and_self() {
        let table = Table::new(vec![
            agent("a", "SOUL", &["b", "a", "b", "ghost"]),
            agent("b", "MIND", &[]),
        ])
        .unwrap();
        let a: &Agent = table.by_id("a").unwrap();
        assert_eq!(ids(&related_of(&table, a)), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_related_order_is_declared_not_table_order() {
        let table = Table::new(vec![
            agent("a", "SOUL", &["c", "b"]),
            agent("b", "MIND", &[]),
            agent("c", "META", &[]),
        ])
        .unwrap();
        let a = table.by_id("a").unwrap();
        assert_eq!(ids(&related_of(&table, a)), vec!["c", "b"]);
    }

    #[test]
    fn test_dangling_references_builtin() {
        let store = EntityStore::builtin().unwrap();
        assert_eq!(
            dangling_references(store.agents()),
            vec![("rad-x", "sentinel"), ("writer", "flameborn")]
        );
        let guardians = dangling_references(store.guardians());
        assert_eq!(guardians.len(), 6);
        assert_eq!(guardians[0], ("sentinel", "rad-x"));
        assert_eq!(guardians[5], ("flameborn", "mo"));
    }
}
