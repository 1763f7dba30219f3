//! Offset/limit pagination parameters.

use serde::Deserialize;
use validator::Validate;

/// Default page size when the caller does not specify one.
const DEFAULT_LIMIT: u32 = 50;

/// Query parameters for paginated list operations.
///
/// `limit` is capped at 100 rows per page; `offset` counts rows to skip from
/// the start of the collection's natural order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PageParams {
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
