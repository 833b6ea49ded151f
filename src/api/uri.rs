//
//  cloudinary-admin
//  api/uri.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource path construction.
//!
//! Admin operations address resources by an ordered sequence of literal and
//! variable segments, e.g. `resources/{resource_type}/{type}/{public_id}`.
//! [`ResourcePath`] collects those segments; [`build_url`] appends them to an
//! API base URL with per-segment percent-encoding.

use std::fmt;

use url::Url;

/// Ordered list of URI path segments for one Admin API call.
///
/// # Example
///
/// ```rust
/// use cloudinary_admin::api::ResourcePath;
///
/// let path = ResourcePath::new("resources")
///     .segment("image")
///     .optional(None::<String>)
///     .segment("tags")
///     .segment("holiday");
///
/// assert_eq!(path.to_string(), "resources/image/tags/holiday");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Starts a path with its root literal segment.
    pub fn new(root: &str) -> Self {
        Self {
            segments: vec![root.to_string()],
        }
    }

    /// Appends a segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a segment only when one is given.
    pub fn optional(self, segment: Option<impl Into<String>>) -> Self {
        match segment {
            Some(segment) => self.segment(segment),
            None => self,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Appends path segments to `base`, percent-encoding each one.
///
/// A `/` inside a variable segment (a public id in a folder, a nested folder
/// path) stays a path separator. Empty pieces are skipped.
///
/// # Errors
///
/// Returns a [`url::ParseError`] if `base` is not an absolute URL that can
/// carry a path.
pub fn build_url(base: &str, segments: &[String]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
        path.pop_if_empty();
        for segment in segments {
            for piece in segment.split('/').filter(|piece| !piece.is_empty()) {
                path.push(piece);
            }
        }
    }
    Ok(url)
}
