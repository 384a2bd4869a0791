pub mod atms;
pub mod licenses;

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::domain::repositories::Page;

/// Header carrying the identity stamped into audit metadata.
pub const AUTHOR_HEADER: &str = "x-author";

/// Author identity from the request, if the caller supplied one.
pub fn author_from(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHOR_HEADER).and_then(|v| v.to_str().ok())
}

const DEFAULT_PER_PAGE: u32 = 20;
const MAX_PER_PAGE: u32 = 100;

/// Pagination query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageParams {
    /// Resolves to a limit/offset window; page is 1-based and per_page is
    /// capped at 100.
    pub fn to_page(&self) -> Page {
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let page = self.page.unwrap_or(1).max(1);
        Page {
            limit: i64::from(per_page),
            offset: i64::from(page - 1) * i64::from(per_page),
        }
    }
}

/// One page of list results plus page metadata.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, params: &PageParams, total: i64) -> Self {
        Self {
            items,
            page: params.page.unwrap_or(1).max(1),
            per_page: params
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
            total,
        }
    }
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_default_to_first_page() {
        let params = PageParams {
            page: None,
            per_page: None,
        };
        let page = params.to_page();
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn page_params_compute_offset_from_one_based_page() {
        let params = PageParams {
            page: Some(3),
            per_page: Some(50),
        };
        let page = params.to_page();
        assert_eq!(page.limit, 50);
        assert_eq!(page.offset, 100);
    }

    #[test]
    fn per_page_is_capped() {
        let params = PageParams {
            page: Some(0),
            per_page: Some(10_000),
        };
        let page = params.to_page();
        assert_eq!(page.limit, 100);
        assert_eq!(page.offset, 0);
    }
}
