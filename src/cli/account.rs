//
//  cloudinary-admin
//  cli/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account-wide commands: ping, usage, resource types, tags and folders.

use anyhow::Result;
use clap::Args;

use crate::api::collect_pages;
use crate::api::common::with_cursor;

use super::{FieldArgs, GlobalOptions};

/// Arguments for commands that take only option fields.
#[derive(Args, Debug)]
pub struct SimpleArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

impl SimpleArgs {
    pub async fn ping(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let response = api.ping(self.fields.to_options()?).await?;
        if global.json {
            global.output().write_response(&response)
        } else {
            global.output().write_success("Connected to the Admin API");
            Ok(())
        }
    }

    pub async fn usage(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        global.respond(api.usage(self.fields.to_options()?).await)
    }

    pub async fn resource_types(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        global.respond(api.resource_types(self.fields.to_options()?).await)
    }
}

#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Resource type: image, video or raw [default: image]
    #[arg(long, short = 'r')]
    pub resource_type: Option<String>,

    /// Only tags starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Follow next_cursor and list every page
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl TagsArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let mut options = self.fields.to_options()?;
        if let Some(resource_type) = &self.resource_type {
            options.insert("resource_type", resource_type.as_str());
        }
        if let Some(prefix) = &self.prefix {
            options.insert("prefix", prefix.as_str());
        }

        if self.all {
            let tags = collect_pages("tags", |cursor| {
                let options = with_cursor(&options, cursor);
                let api = api.clone();
                async move { api.tags(options).await }
            })
            .await?;
            return global.output().write_items("tags", &tags);
        }

        global.respond(api.tags(options).await)
    }
}

#[derive(Args, Debug)]
pub struct FoldersArgs {
    /// List the sub-folders of this folder instead of the root folders
    pub path: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl FoldersArgs {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;
        let options = self.fields.to_options()?;
        let result = match &self.path {
            Some(path) => api.sub_folders(path, options).await,
            None => api.root_folders(options).await,
        };
        global.respond(result)
    }
}
