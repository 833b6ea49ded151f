//
//  cloudinary-admin
//  api/admin/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource operations: listing, lookup, update, deletion, restore,
//! publishing and tags.
//!
//! All of these honor the `resource_type` option (default `image`); those
//! addressing a delivery type also honor `type` (default `upload`).

use serde_json::Value;

use super::{delivery_type, resolve, resource_type, string_list, Api, ApiResult};
use crate::api::options::Options;
use crate::api::params::write_parameters;
use crate::api::strategy::HttpMethod;
use crate::api::uri::ResourcePath;

const LIST_PARAMS: &[&str] = &[
    "next_cursor",
    "direction",
    "max_results",
    "prefix",
    "tags",
    "context",
    "moderations",
    "start_at",
];

const TAG_LIST_PARAMS: &[&str] = &[
    "next_cursor",
    "direction",
    "max_results",
    "tags",
    "context",
    "moderations",
];

const BY_IDS_PARAMS: &[&str] = &["tags", "context", "moderations"];

const RESOURCE_PARAMS: &[&str] = &[
    "exif",
    "colors",
    "faces",
    "coordinates",
    "image_metadata",
    "pages",
    "phash",
    "max_results",
];

const DELETE_PARAMS: &[&str] = &["keep_original", "invalidate", "next_cursor"];

const TAGS_PARAMS: &[&str] = &["next_cursor", "max_results", "prefix"];

const PUBLISH_PARAMS: &[&str] = &["invalidate", "overwrite"];

impl Api {
    /// Lists resources of one resource type, optionally narrowed to a
    /// delivery type with the `type` option.
    ///
    /// ```rust,no_run
    /// use cloudinary_admin::{options, Api};
    ///
    /// # async fn example(api: Api) -> Result<(), cloudinary_admin::ApiError> {
    /// let page = api
    ///     .resources(options! { "type" => "upload", "prefix" => "samples/", "max_results" => 50 })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resources(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .optional(options.str("type"));
        self.call(HttpMethod::Get, path, options.only(LIST_PARAMS), &options)
            .await
    }

    pub async fn resources_by_tag(&self, tag: &str, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment("tags")
            .segment(tag);
        self.call(HttpMethod::Get, path, options.only(TAG_LIST_PARAMS), &options)
            .await
    }

    pub async fn resources_by_ids(
        &self,
        public_ids: impl IntoIterator<Item = impl Into<String>>,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options));
        let mut params = options.only(BY_IDS_PARAMS);
        params.insert("public_ids", string_list(public_ids));
        self.call(HttpMethod::Get, path, params, &options).await
    }

    /// Lists resources in a moderation queue, e.g. `("manual", "pending")`.
    pub async fn resources_by_moderation(
        &self,
        kind: &str,
        status: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment("moderations")
            .segment(kind)
            .segment(status);
        self.call(HttpMethod::Get, path, options.only(TAG_LIST_PARAMS), &options)
            .await
    }

    /// Details of a single resource.
    pub async fn resource(&self, public_id: &str, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options))
            .segment(public_id);
        self.call(HttpMethod::Get, path, options.only(RESOURCE_PARAMS), &options)
            .await
    }

    /// Updates tags, context, coordinates, moderation status and add-on
    /// requests of a resource.
    pub async fn update(&self, public_id: &str, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options))
            .segment(public_id);
        let mut params = write_parameters(&options);
        if let Some(status) = options.get("moderation_status") {
            params.insert("moderation_status", status.clone());
        }
        self.call(HttpMethod::Post, path, params, &options).await
    }

    pub async fn delete_resources(
        &self,
        public_ids: impl IntoIterator<Item = impl Into<String>>,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options));
        let mut params = options.only(DELETE_PARAMS);
        params.insert("public_ids", string_list(public_ids));
        self.call(HttpMethod::Delete, path, params, &options).await
    }

    pub async fn delete_resources_by_prefix(
        &self,
        prefix: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options));
        let mut params = options.only(DELETE_PARAMS);
        params.insert("prefix", prefix);
        self.call(HttpMethod::Delete, path, params, &options).await
    }

    pub async fn delete_resources_by_tag(
        &self,
        tag: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment("tags")
            .segment(tag);
        self.call(HttpMethod::Delete, path, options.only(DELETE_PARAMS), &options)
            .await
    }

    /// Deletes every resource of the resource and delivery type. Large
    /// accounts are deleted in batches; repeat with the returned
    /// `next_cursor` until none is returned.
    pub async fn delete_all_resources(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options));
        let mut params = options.only(DELETE_PARAMS);
        params.insert("all", true);
        self.call(HttpMethod::Delete, path, params, &options).await
    }

    pub async fn delete_derived_resources(
        &self,
        derived_resource_ids: impl IntoIterator<Item = impl Into<String>>,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let mut params = Options::new();
        params.insert("derived_resource_ids", string_list(derived_resource_ids));
        self.call(
            HttpMethod::Delete,
            ResourcePath::new("derived_resources"),
            params,
            &options,
        )
        .await
    }

    /// Lists tags in use for a resource type.
    pub async fn tags(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("tags").segment(resource_type(&options));
        self.call(HttpMethod::Get, path, options.only(TAGS_PARAMS), &options)
            .await
    }

    /// Restores deleted resources from backup.
    pub async fn restore(
        &self,
        public_ids: impl IntoIterator<Item = impl Into<String>>,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment(delivery_type(&options))
            .segment("restore");
        let mut params = Options::new();
        params.insert("public_ids", string_list(public_ids));
        self.call(HttpMethod::Post, path, params, &options).await
    }

    pub async fn publish_by_prefix(&self, prefix: &str, options: impl Into<Option<Options>>) -> ApiResult {
        self.publish("prefix", Value::from(prefix), resolve(options))
            .await
    }

    pub async fn publish_by_tag(&self, tag: &str, options: impl Into<Option<Options>>) -> ApiResult {
        self.publish("tag", Value::from(tag), resolve(options)).await
    }

    pub async fn publish_by_ids(
        &self,
        public_ids: impl IntoIterator<Item = impl Into<String>>,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        self.publish("public_ids", string_list(public_ids), resolve(options))
            .await
    }

    /// Publishes authenticated resources selected by one key.
    async fn publish(&self, by: &str, selector: Value, options: Options) -> ApiResult {
        let path = ResourcePath::new("resources")
            .segment(resource_type(&options))
            .segment("publish_resources");
        let mut params = options.only(PUBLISH_PARAMS);
        params.insert(by, selector);
        self.call(HttpMethod::Post, path, params, &options).await
    }
}
