//
//  cloudinary-admin
//  api/admin/transformations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Named and derived transformations.
//!
//! A transformation is addressed either by its name or by its canonical
//! string, e.g. `c_scale,w_100`.

use super::{resolve, Api, ApiResult};
use crate::api::options::Options;
use crate::api::strategy::HttpMethod;
use crate::api::uri::ResourcePath;

const PAGE_PARAMS: &[&str] = &["next_cursor", "max_results"];

impl Api {
    pub async fn transformations(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(
            HttpMethod::Get,
            ResourcePath::new("transformations"),
            options.only(PAGE_PARAMS),
            &options,
        )
        .await
    }

    /// Details of a transformation, including its `info` definition and the
    /// derived resources generated with it.
    pub async fn transformation(
        &self,
        transformation: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("transformations").segment(transformation);
        self.call(HttpMethod::Get, path, options.only(PAGE_PARAMS), &options)
            .await
    }

    pub async fn delete_transformation(
        &self,
        transformation: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("transformations").segment(transformation);
        self.call(HttpMethod::Delete, path, Options::new(), &options)
            .await
    }

    /// Updates a transformation. The `updates` map is sent as-is; recognized
    /// keys include `allowed_for_strict` and `unsafe_update` (a new
    /// definition for a named transformation).
    pub async fn update_transformation(
        &self,
        transformation: &str,
        updates: Options,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("transformations").segment(transformation);
        self.call(HttpMethod::Put, path, updates, &options).await
    }

    /// Creates a named transformation from a canonical definition string.
    ///
    /// ```rust,no_run
    /// use cloudinary_admin::{Api, Transformation};
    ///
    /// # async fn example(api: Api) -> Result<(), cloudinary_admin::ApiError> {
    /// let definition = Transformation::new().crop("scale").width(102).generate();
    /// api.create_transformation("thumbnail", &definition, None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_transformation(
        &self,
        name: &str,
        definition: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("transformations").segment(name);
        let params = Options::new().with("transformation", definition);
        self.call(HttpMethod::Post, path, params, &options).await
    }
}
