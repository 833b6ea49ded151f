//
//  cloudinary-admin
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cursor Pagination for Admin API List Responses
//!
//! List operations return one page at a time. A page that has more results
//! after it carries a `next_cursor`; passing that value back as the
//! `next_cursor` option fetches the following page. The last page has no
//! cursor.
//!
//! | Type | Use |
//! |------|-----|
//! | [`Paginator`] | Drive the loop yourself, one request per step |
//! | [`collect_pages`] | Gather one list field across every page |
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudinary_admin::{collect_pages, options, Api, Options};
//! use cloudinary_admin::api::common::with_cursor;
//!
//! async fn all_images(api: &Api) -> Result<usize, cloudinary_admin::ApiError> {
//!     let base = options! { "max_results" => 500 };
//!     let resources = collect_pages("resources", |cursor| {
//!         let options = with_cursor(&base, cursor);
//!         async move { api.resources(options).await }
//!     })
//!     .await?;
//!     Ok(resources.len())
//! }
//! ```

use std::collections::HashSet;
use std::future::Future;

use serde_json::Value;

use super::{ApiError, ApiResponse};
use crate::api::options::Options;

/// Returns a copy of `options` with `next_cursor` set, or removed when `cursor`
/// is `None`.
pub fn with_cursor(options: &Options, cursor: Option<String>) -> Options {
    let mut options = options.clone();
    match cursor {
        Some(cursor) => {
            options.insert("next_cursor", cursor);
        }
        None => {
            options.remove("next_cursor");
        }
    }
    options
}

/// Tracks the cursor state of a paginated listing.
///
/// The paginator stops when a page has no cursor, and also when the service
/// hands back a cursor it already returned, so a loop driven by it always
/// terminates.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    cursor: Option<String>,
    seen: HashSet<String>,
    pages: usize,
    done: bool,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a cursor obtained elsewhere.
    pub fn starting_at(cursor: impl Into<String>) -> Self {
        let cursor = cursor.into();
        let mut seen = HashSet::new();
        seen.insert(cursor.clone());
        Self {
            cursor: Some(cursor),
            seen,
            pages: 0,
            done: false,
        }
    }

    /// The cursor for the next request, `None` for the first page.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn has_next(&self) -> bool {
        !self.done
    }

    /// Number of pages recorded so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Records a fetched page and moves to its cursor.
    pub fn advance(&mut self, page: &ApiResponse) {
        self.pages += 1;
        match page.next_cursor() {
            Some(next) if !next.is_empty() && self.seen.insert(next.to_string()) => {
                self.cursor = Some(next.to_string());
            }
            _ => {
                self.cursor = None;
                self.done = true;
            }
        }
    }
}

/// Fetches every page of a listing and concatenates the array under `list_key`.
///
/// `fetch` is called with `None` for the first page and with each page's
/// `next_cursor` afterwards.
///
/// # Errors
///
/// Returns the first error produced by `fetch`; pages gathered before it are
/// discarded.
pub async fn collect_pages<F, Fut>(list_key: &str, mut fetch: F) -> Result<Vec<Value>, ApiError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ApiResponse, ApiError>>,
{
    let mut paginator = Paginator::new();
    let mut items = Vec::new();

    while paginator.has_next() {
        let page = fetch(paginator.cursor().map(str::to_string)).await?;
        items.extend(page.list(list_key).iter().cloned());
        paginator.advance(&page);
    }

    tracing::debug!(pages = paginator.pages(), items = items.len(), "Collected {}", list_key);
    Ok(items)
}
