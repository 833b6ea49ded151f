//
//  cloudinary-admin
//  api/admin/upload_mappings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upload mappings. A mapping ties a folder to a remote URL prefix
//! (`template`) so that resources are fetched lazily on first access.
//!
//! Mappings are addressed by folder name in the `folder` parameter rather
//! than in the path.

use super::{resolve, Api, ApiResult};
use crate::api::options::Options;
use crate::api::strategy::HttpMethod;
use crate::api::uri::ResourcePath;

impl Api {
    pub async fn upload_mappings(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(
            HttpMethod::Get,
            ResourcePath::new("upload_mappings"),
            options.only(&["next_cursor", "max_results"]),
            &options,
        )
        .await
    }

    pub async fn upload_mapping(&self, folder: &str, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(
            HttpMethod::Get,
            ResourcePath::new("upload_mappings"),
            Options::new().with("folder", folder),
            &options,
        )
        .await
    }

    pub async fn delete_upload_mapping(
        &self,
        folder: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        let options = resolve(options);
        self.call(
            HttpMethod::Delete,
            ResourcePath::new("upload_mappings"),
            Options::new().with("folder", folder),
            &options,
        )
        .await
    }

    /// Changes the `template` of an existing mapping.
    pub async fn update_upload_mapping(
        &self,
        folder: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        self.write_upload_mapping(HttpMethod::Put, folder, resolve(options))
            .await
    }

    pub async fn create_upload_mapping(
        &self,
        folder: &str,
        options: impl Into<Option<Options>>,
    ) -> ApiResult {
        self.write_upload_mapping(HttpMethod::Post, folder, resolve(options))
            .await
    }

    async fn write_upload_mapping(&self, method: HttpMethod, folder: &str, options: Options) -> ApiResult {
        let mut params = Options::new().with("folder", folder);
        params.extend(options.only(&["template"]));
        self.call(method, ResourcePath::new("upload_mappings"), params, &options)
            .await
    }
}
