pub mod echo;
pub mod proxy;

use serde::Serialize;

/// Structured payload of list-shaped tool results.
#[derive(Debug, Serialize)]
pub struct ItemsResult<T> {
    pub items: Vec<T>,
}
