//
//  cloudinary-admin
//  api/admin/folders.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Folder browsing.

use super::{resolve, Api, ApiResult};
use crate::api::options::Options;
use crate::api::strategy::HttpMethod;
use crate::api::uri::ResourcePath;

impl Api {
    pub async fn root_folders(&self, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        self.call(HttpMethod::Get, ResourcePath::new("folders"), Options::new(), &options)
            .await
    }

    /// Lists the folders directly below `path`. Nested paths such as
    /// `parent/child` keep their `/` separators.
    pub async fn sub_folders(&self, path: &str, options: impl Into<Option<Options>>) -> ApiResult {
        let options = resolve(options);
        let path = ResourcePath::new("folders").segment(path);
        self.call(HttpMethod::Get, path, Options::new(), &options)
            .await
    }
}
