//! Response envelopes used by every API endpoint.
//!
//! Single records come wrapped as `{ message, statusCode, data }`
//! ([`ApiEnvelope`]); lists come as `{ data: [...], meta: {...} }`
//! ([`Paginated`]).
//!
//! # Deref Pattern
//!
//! `Paginated<T>` implements `Deref<Target = Vec<T>>`, so a page can be used
//! like the list it carries:
//!
//! ```rust
//! use tripkit_api::services::Paginated;
//!
//! let page: Paginated<u32> = serde_json::from_str(
//!     r#"{"data": [1, 2], "meta": {"page": 1, "limit": 2, "itemCount": 3,
//!         "pageCount": 2, "hasPreviousPage": false, "hasNextPage": true}}"#,
//! ).unwrap();
//!
//! assert_eq!(page.len(), 2);
//! assert_eq!(page.next_page(), Some(2));
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// The `{ message, statusCode, data }` wrapper around single records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    /// Human-readable outcome, e.g. `"Trip created"`.
    #[serde(default)]
    pub message: Option<String>,

    /// The HTTP status the server meant to send.
    #[serde(default)]
    pub status_code: Option<u16>,

    /// The payload.
    pub data: T,
}

/// Pagination metadata of a list response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total number of items across all pages.
    pub item_count: u64,
    /// Total number of pages.
    pub page_count: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items of this page.
    pub data: Vec<T>,

    /// Pagination metadata. Endpoints that return everything at once omit it.
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> Paginated<T> {
    /// Page number to request next, if there is a next page.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.meta
            .filter(|meta| meta.has_next_page)
            .map(|meta| meta.page + 1)
    }

    /// Page number to request for the previous page, if there is one.
    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        self.meta
            .filter(|meta| meta.has_previous_page && meta.page > 1)
            .map(|meta| meta.page - 1)
    }

    /// Takes ownership of the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> Deref for Paginated<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Paginated<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// Order of a list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Query parameters of list endpoints.
///
/// Unset fields are left to the server defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Sort order by creation date.
    pub order: Option<SortOrder>,
}

impl PageParams {
    /// Requests page `page` of `limit` items.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            order: None,
        }
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub(crate) fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(limit) = self.limit {
            query.insert("limit".to_string(), limit.to_string());
        }
        if let Some(order) = self.order {
            query.insert("order".to_string(), order.as_str().to_string());
        }
        query
    }
}
