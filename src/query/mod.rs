//! Query layer: relation resolution, category ordering, sequence navigation
//! and the page views composed from them. Everything here is a pure function
//! over immutable tables.

mod neighbors;
mod ordering;
mod related;
mod views;

pub use neighbors::{neighbors, Neighbors};
pub use ordering::{group_by_category, group_by_layer, order_by_category, order_by_layer, LayerPrecedence};
pub use related::{dangling_references, related_of};
pub use views::{detail, AgentCard, DetailView, GuardianCard};
