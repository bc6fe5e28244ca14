pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

pub use config::Config;
pub use error::{GridError, Result};
pub use model::{Agent, EntityKind, Guardian, Record};
pub use query::{detail, neighbors, order_by_layer, related_of, LayerPrecedence, Neighbors};
pub use store::{EntityRef, EntityStore, Table};
