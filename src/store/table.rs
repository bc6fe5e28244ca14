//! Immutable record table with an id index built once at construction.

use std::collections::HashMap;

use crate::error::{GridError, Result};
use crate::model::Record;

/// Records of one kind in authored order, indexed by id.
#[derive(Debug, Clone)]
pub struct Table<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Record> Table<T> {
    /// Build a table, rejecting the first duplicated id.
    pub fn new(records: Vec<T>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.id().to_string(), pos).is_some() {
                return Err(GridError::DuplicateId {
                    kind: T::KIND,
                    id: record.id().to_string(),
                });
            }
        }
        Ok(Self { records, index })
    }

    /// All records in declaration order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Lookup that surfaces a missing id as `GridError::NotFound`.
    pub fn by_id(&self, id: &str) -> Result<&T> {
        self.get(id).ok_or_else(|| GridError::not_found(T::KIND, id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of `id` in declaration order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{test_agent as agent, EntityKind};

    #[test]
    fn test_table_preserves_order() {
        let table = Table::new(vec![
            agent("c", "BODY", &[]),
            agent("a", "SOUL", &[]),
            agent("b", "MIND", &[]),
        ])
        .unwrap();
        let ids: Vec<_> = table.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(table.position("c"), Some(0));
        assert_eq!(table.position("b"), Some(2));
        assert_eq!(table.position("z"), None);
    }

    #[test]
    fn test_table_lookup() {
        let table = Table::new(vec![agent("mo", "BODY", &[]), agent("woo", "SOUL", &[])]).unwrap();
        assert_eq!(table.by_id("woo").unwrap().layer, "SOUL");
        assert!(table.contains("mo"));
        assert!(table.get("nobody").is_none());

        let err = table.by_id("nobody").unwrap_err();
        assert!(matches!(
            err,
            GridError::NotFound { kind: EntityKind::Agent, ref id } if id == "nobody"
        ));
    }

    #[test]
    fn test_table_rejects_duplicate() {
        let err = Table::new(vec![agent("mo", "BODY", &[]), agent("mo", "SOUL", &[])]).unwrap_err();
        assert!(matches!(err, GridError::DuplicateId { ref id, .. } if id == "mo"));
    }

    #[test]
    fn test_empty_table() {
        let table: Table<crate::model::Agent> = Table::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
