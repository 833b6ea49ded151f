//
//  cloudinary-admin
//  api/strategy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The seam between Admin operations and the transport.
//!
//! [`Api`](super::Api) never talks HTTP itself. It hands every request to a
//! [`CallStrategy`], which is responsible for authentication, serialization,
//! transport and translating error statuses into [`ApiError`] values.

use std::fmt;

use async_trait::async_trait;

use super::common::{ApiError, ApiResponse};
use super::options::Options;

/// HTTP verbs used by the Admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the request body rather than the query string.
    pub fn sends_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Performs one Admin API call.
///
/// # Parameters
///
/// * `method` - The HTTP verb
/// * `uri` - Ordered path segments below the account's API root
/// * `params` - The filtered parameter map to transmit
/// * `options` - The caller's original options, for per-call overrides such
///   as credentials or timeouts
///
/// # Errors
///
/// Implementations report error statuses as the matching [`ApiError`]
/// variant and carry the remote message text.
#[async_trait]
pub trait CallStrategy: Send + Sync {
    async fn call_api(
        &self,
        method: HttpMethod,
        uri: Vec<String>,
        params: Options,
        options: &Options,
    ) -> Result<ApiResponse, ApiError>;
}
