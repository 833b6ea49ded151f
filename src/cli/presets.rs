//
//  cloudinary-admin
//  cli/presets.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upload preset commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{FieldArgs, GlobalOptions};

#[derive(Args, Debug)]
pub struct PresetsCommand {
    #[command(subcommand)]
    pub command: PresetsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PresetsSubcommand {
    /// List upload presets
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show an upload preset
    Get(NameArgs),

    /// Create an upload preset from fields such as folder, tags or unsigned
    Create(CreateArgs),

    /// Replace the settings of an upload preset
    Update(NameArgs),

    /// Delete an upload preset
    Delete(NameArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Preset name
    pub name: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Preset name; generated by the service when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// Allow unsigned uploads with this preset
    #[arg(long)]
    pub unsigned: bool,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl PresetsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;

        match &self.command {
            PresetsSubcommand::List(args) => {
                global.respond(api.upload_presets(args.fields.to_options()?).await)
            }
            PresetsSubcommand::Get(args) => {
                global.respond(api.upload_preset(&args.name, args.fields.to_options()?).await)
            }
            PresetsSubcommand::Create(args) => {
                let mut options = args.fields.to_options()?;
                if let Some(name) = &args.name {
                    options.insert("name", name.as_str());
                }
                if args.unsigned {
                    options.insert("unsigned", true);
                }
                global.respond(api.create_upload_preset(options).await)
            }
            PresetsSubcommand::Update(args) => global.respond(
                api.update_upload_preset(&args.name, args.fields.to_options()?)
                    .await,
            ),
            PresetsSubcommand::Delete(args) => global.respond(
                api.delete_upload_preset(&args.name, args.fields.to_options()?)
                    .await,
            ),
        }
    }
}
