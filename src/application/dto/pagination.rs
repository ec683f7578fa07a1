use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One offset-windowed page. `total` counts every record matching the
/// filter, independent of the window.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, limit: u32, offset: u32) -> Self {
        Self {
            data,
            total,
            limit,
            offset,
        }
    }
}
