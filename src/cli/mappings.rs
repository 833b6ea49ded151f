//
//  cloudinary-admin
//  cli/mappings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upload mapping commands
//!
//! ```bash
//! cld mappings create wiki --template https://upload.wikimedia.org/wikipedia/
//! cld mappings get wiki
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{FieldArgs, GlobalOptions};

#[derive(Args, Debug)]
pub struct MappingsCommand {
    #[command(subcommand)]
    pub command: MappingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MappingsSubcommand {
    /// List upload mappings
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show the mapping of a folder
    Get(FolderArgs),

    /// Map a folder to a remote URL prefix
    Create(TemplateArgs),

    /// Change the URL prefix of a mapped folder
    Update(TemplateArgs),

    /// Remove the mapping of a folder
    Delete(FolderArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct FolderArgs {
    pub folder: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    pub folder: String,

    /// URL prefix the folder maps to
    #[arg(long)]
    pub template: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl TemplateArgs {
    fn options(&self) -> Result<crate::api::Options> {
        let mut options = self.fields.to_options()?;
        options.insert("template", self.template.as_str());
        Ok(options)
    }
}

impl MappingsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;

        match &self.command {
            MappingsSubcommand::List(args) => {
                global.respond(api.upload_mappings(args.fields.to_options()?).await)
            }
            MappingsSubcommand::Get(args) => global.respond(
                api.upload_mapping(&args.folder, args.fields.to_options()?)
                    .await,
            ),
            MappingsSubcommand::Create(args) => {
                global.respond(api.create_upload_mapping(&args.folder, args.options()?).await)
            }
            MappingsSubcommand::Update(args) => {
                global.respond(api.update_upload_mapping(&args.folder, args.options()?).await)
            }
            MappingsSubcommand::Delete(args) => global.respond(
                api.delete_upload_mapping(&args.folder, args.fields.to_options()?)
                    .await,
            ),
        }
    }
}
