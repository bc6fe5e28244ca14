use serde::Serialize;

use crate::model::Record;
use crate::store::Table;

/// Previous and next records around an id in table order.
#[derive(Debug, Serialize)]
pub struct Neighbors<'a, T> {
    pub previous: Option<&'a T>,
    pub next: Option<&'a T>,
}

impl<'a, T> Neighbors<'a, T> {
    pub fn none() -> Self {
        Self {
            previous: None,
            next: None,
        }
    }
}

impl<T> Clone for Neighbors<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Neighbors<'_, T> {}

/// Neighbors of `id` in the table's declaration order (not category order).
/// An id that is not present yields no neighbors.
pub fn neighbors<'a, T: Record>(table: &'a Table<T>, id: &str) -> Neighbors<'a, T> {
    let records = table.all();
    match table.position(id) {
        Some(pos) => Neighbors {
            previous: pos.checked_sub(1).map(|p| &records[p]),
            next: records.get(pos + 1),
        },
        None => Neighbors::none(),
    }
}
