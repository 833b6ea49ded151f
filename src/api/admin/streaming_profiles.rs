//
//  cloudinary-admin
//  api/admin/streaming_profiles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Adaptive streaming profiles.
//!
//! A profile is an ordered list of [`Representation`]s, one per rendition.
//! Representations are sent as JSON text:
//! `[{"transformation":"c_limit,h_1080,w_1920"}, ...]`.

use super::{resolve, Api, ApiResult};
use crate::api::options::Options;
use crate::api::strategy::HttpMethod;
use crate::api::uri::ResourcePath;
use crate::transformation::Representation;

fn encode_representations(representations: &[Representation]) -> Result<String, serde_json::Error> {
    serde_json::to_string(representations)
}

impl Api {
    /// Creates a custom streaming profile.
    ///
    /// ```rust,no_run
    /// use cloudinary_admin::{Api, Representation, Transformation};
    ///
    /// # async fn example(api: Api) -> Result<(), cloudinary_admin::ApiError> {
    /// let representations = vec![
    ///     Representation::new(Transformation::new().crop("limit").width(1200).height(1200).bit_rate("5m")),
    ///     Representation::new(Transformation::new().crop("limit").width(640).height(480).bit_rate("1m")),
    /// ];
    /// api.create_streaming_profile("custom_hd", Some("Custom HD"), &representations, None)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_streaming_profile(
        &self,
        name: &str,
        display_name: Option<&str>,
        representations: &[Representation],
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let mut params = Options::new()
            .with("name", name)
            .with("representations", encode_representations(representations)?);
        if let Some(display_name) = display_name {
            params.insert("display_name", display_name);
        }
        self.call(
            HttpMethod::Post,
            ResourcePath::new("streaming_profiles"),
            params,
            &options,
        )
        .await
    }

    pub async fn get_streaming_profile(
        &self,
        name: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("streaming_profiles").segment(name);
        self.call(HttpMethod::Get, path, Options::new(), &options)
            .await
    }

    /// Lists predefined and custom streaming profiles.
    pub async fn list_streaming_profiles(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(
            HttpMethod::Get,
            ResourcePath::new("streaming_profiles"),
            Options::new(),
            &options,
        )
        .await
    }

    /// Deletes a custom profile. Predefined profiles are reset to their
    /// default settings instead.
    pub async fn delete_streaming_profile(
        &self,
        name: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("streaming_profiles").segment(name);
        self.call(HttpMethod::Delete, path, Options::new(), &options)
            .await
    }

    /// Updates a profile. Only the parts given are sent.
    pub async fn update_streaming_profile(
        &self,
        name: &str,
        display_name: Option<&str>,
        representations: Option<&[Representation]>,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("streaming_profiles").segment(name);
        let mut params = Options::new();
        if let Some(representations) = representations {
            params.insert("representations", encode_representations(representations)?);
        }
        if let Some(display_name) = display_name {
            params.insert("display_name", display_name);
        }
        self.call(HttpMethod::Put, path, params, &options).await
    }
}
