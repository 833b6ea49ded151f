//
//  cloudinary-admin
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Admin API Layer
//!
//! This module turns typed method calls into Admin API requests.
//!
//! ## Architecture
//!
//! - [`options`]: Schema-less option maps and allow-list filtering
//! - [`uri`]: Resource path segments and absolute URL construction
//! - [`params`]: Write/upload parameter builders shared by several operations
//! - [`strategy`]: The [`CallStrategy`] seam between operations and transport
//! - [`client`]: [`HttpStrategy`], the reqwest-backed strategy
//! - [`admin`]: [`Api`], one method per remote operation
//! - [`common`]: [`ApiError`], [`ApiResponse`], rate limits and pagination
//!
//! ## Error Handling
//!
//! Error statuses are mapped by the strategy, never by [`Api`] itself:
//!
//! - `BadRequest`: 400
//! - `AuthorizationRequired`: 401
//! - `NotAllowed`: 403
//! - `NotFound`: 404
//! - `AlreadyExists`: 409
//! - `RateLimited`: 420
//! - `GeneralError`: 500

/// Per-operation methods of the Admin API.
pub mod admin;

/// reqwest-backed [`CallStrategy`] implementation.
pub mod client;

/// Shared response and error types.
pub mod common;

/// Option maps and allow-list filtering.
pub mod options;

/// Write and upload parameter builders.
pub mod params;

/// The call strategy trait and HTTP verbs.
pub mod strategy;

/// Resource path building.
pub mod uri;

pub use admin::{Api, ApiResult};
pub use client::HttpStrategy;
pub use common::{collect_pages, ApiError, ApiResponse, RateLimit};
pub use options::Options;
pub use strategy::{CallStrategy, HttpMethod};
pub use uri::ResourcePath;
