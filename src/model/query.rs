use serde::{Deserialize, Serialize};

/// Pagination parameters shared by every list endpoint.
///
/// Values are forwarded verbatim; the backend owns validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
}

impl ListQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

/// Pagination plus ordering, for the photo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PhotoQuery {
    #[serde(flatten)]
    pub list: ListQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl PhotoQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            list: ListQuery::new(page, size),
            order: None,
        }
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }
}
