//
//  cloudinary-admin
//  api/admin/upload_presets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upload presets: stored sets of upload parameters.

use super::{resolve, Api, ApiResult};
use crate::api::options::Options;
use crate::api::params::{clear_empty, upload_parameters};
use crate::api::strategy::HttpMethod;
use crate::api::uri::ResourcePath;

const PAGE_PARAMS: &[&str] = &["next_cursor", "max_results"];

const PRESET_FLAGS: &[&str] = &["unsigned", "disallow_public_id"];

const CREATE_FLAGS: &[&str] = &["name", "unsigned", "disallow_public_id"];

impl Api {
    pub async fn upload_presets(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(
            HttpMethod::Get,
            ResourcePath::new("upload_presets"),
            options.only(PAGE_PARAMS),
            &options,
        )
        .await
    }

    pub async fn upload_preset(&self, name: &str, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("upload_presets").segment(name);
        self.call(HttpMethod::Get, path, options.only(&["max_results"]), &options)
            .await
    }

    pub async fn delete_upload_preset(
        &self,
        name: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("upload_presets").segment(name);
        self.call(HttpMethod::Delete, path, Options::new(), &options)
            .await
    }

    /// Replaces the settings of a preset. Empty values are not sent.
    pub async fn update_upload_preset(
        &self,
        name: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("upload_presets").segment(name);
        let mut params = clear_empty(upload_parameters(&options));
        params.extend(options.only(PRESET_FLAGS));
        self.call(HttpMethod::Put, path, params, &options).await
    }

    /// Creates a preset. Without a `name` option the service generates one.
    ///
    /// ```rust,no_run
    /// use cloudinary_admin::{options, Api};
    ///
    /// # async fn example(api: Api) -> Result<(), cloudinary_admin::ApiError> {
    /// let preset = api
    ///     .create_upload_preset(options! {
    ///         "name" => "avatars",
    ///         "unsigned" => true,
    ///         "folder" => "avatars",
    ///         "tags" => vec!["avatar", "user"],
    ///     })
    ///     .await?;
    /// println!("{}", preset["name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_upload_preset(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let mut params = clear_empty(upload_parameters(&options));
        params.extend(options.only(CREATE_FLAGS));
        self.call(
            HttpMethod::Post,
            ResourcePath::new("upload_presets"),
            params,
            &options,
        )
        .await
    }
}
