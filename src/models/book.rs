use serde::{Deserialize, Serialize};

/// A single catalog entry as served by the upstream books API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    #[serde(alias = "unitsSold")]
    pub units_sold: u64,
    pub price: u64,
}
