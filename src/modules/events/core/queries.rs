// Query data type for listing the events inside a reporting window.
//
// Lives in core so the store port can name it without depending on a use case.

use serde::Deserialize;

pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEvents {
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl ListEvents {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn offset(mut self, v: u64) -> Self {
        self.offset = v;
        self
    }

    pub fn limit(mut self, v: u64) -> Self {
        self.limit = v;
        self
    }
}
