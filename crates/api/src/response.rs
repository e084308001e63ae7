//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

use audhub_core::pagination::{Page, PageParams};

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Paginated listing payload: the page items plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct PageEnvelope<T: Serialize> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T: Serialize> PageEnvelope<T> {
    pub fn new(page: Page<T>, params: &PageParams) -> Self {
        let total_pages = page.total_pages(params.page_size);
        Self {
            items: page.items,
            total_count: page.total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }
}
