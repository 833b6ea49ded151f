//
//  cloudinary-admin
//  api/admin/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The Admin API client.
//!
//! [`Api`] exposes one async method per remote operation. Every method
//! follows the same recipe:
//!
//! 1. Treat an absent options argument as an empty map
//! 2. Derive `resource_type` (default `image`) and `type` (default `upload`)
//!    where the operation's path needs them
//! 3. Build the resource path and filter the options down to the parameters
//!    the operation accepts, then add its computed parameters
//! 4. Hand `(verb, path, params, options)` to the [`CallStrategy`] and return
//!    its result untouched
//!
//! The operations are grouped by resource:
//!
//! - [`resources`]: listing, inspecting, updating, deleting, restoring and
//!   publishing assets, plus tags
//! - [`transformations`]: named and derived transformations
//! - [`upload_presets`]: upload preset definitions
//! - [`upload_mappings`]: folder to remote URL mappings
//! - [`streaming_profiles`]: adaptive streaming profiles
//! - [`folders`]: folder browsing

use std::sync::Arc;

use serde_json::Value;

use super::client::HttpStrategy;
use super::common::{ApiError, ApiResponse};
use super::options::Options;
use super::strategy::{CallStrategy, HttpMethod};
use super::uri::ResourcePath;
use crate::config::Config;

pub mod folders;
pub mod resources;
pub mod streaming_profiles;
pub mod transformations;
pub mod upload_mappings;
pub mod upload_presets;

/// Result of every Admin API operation.
pub type ApiResult = Result<ApiResponse, ApiError>;

/// Admin API client.
///
/// Cloning an `Api` is cheap; clones share the same strategy and therefore
/// the same connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use cloudinary_admin::{options, Api, ApiError, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let api = Api::new(Config::load()?)?;
///
/// match api.resource("sample", options! { "colors" => true }).await {
///     Ok(resource) => println!("{}", resource["secure_url"]),
///     Err(ApiError::NotFound(message)) => eprintln!("{}", message),
///     Err(e) => return Err(e.into()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Api {
    strategy: Arc<dyn CallStrategy>,
}

impl Api {
    /// Creates a client backed by [`HttpStrategy`].
    pub fn new(config: Config) -> Result<Self, ApiError> {
        Ok(Self::with_strategy(HttpStrategy::new(config)?))
    }

    /// Creates a client backed by a custom strategy.
    pub fn with_strategy(strategy: impl CallStrategy + 'static) -> Self {
        Self {
            strategy: Arc::new(strategy),
        }
    }

    pub fn from_shared(strategy: Arc<dyn CallStrategy>) -> Self {
        Self { strategy }
    }

    pub(crate) async fn call(
        &self,
        method: HttpMethod,
        path: ResourcePath,
        params: Options,
        options: &Options,
    ) -> ApiResult {
        self.strategy
            .call_api(method, path.into_segments(), params, options)
            .await
    }

    /// Tests reachability and authentication.
    pub async fn ping(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(HttpMethod::Get, ResourcePath::new("ping"), Options::new(), &options)
            .await
    }

    /// Account usage report: storage, bandwidth, requests and the plan's limits.
    pub async fn usage(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(HttpMethod::Get, ResourcePath::new("usage"), Options::new(), &options)
            .await
    }

    /// Resource types present in the account, e.g. `image`, `video`, `raw`.
    pub async fn resource_types(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(HttpMethod::Get, ResourcePath::new("resources"), Options::new(), &options)
            .await
    }
}

pub(crate) fn resolve(options: impl Into<Option<Options>>) -> Options {
    options.into().unwrap_or_default()
}

pub(crate) fn resource_type(options: &Options) -> String {
    options.str_or("resource_type", "image")
}

pub(crate) fn delivery_type(options: &Options) -> String {
    options.str_or("type", "upload")
}

pub(crate) fn string_list(items: impl IntoIterator<Item = impl Into<String>>) -> Value {
    Value::Array(items.into_iter().map(|s| Value::String(s.into())).collect())
}
