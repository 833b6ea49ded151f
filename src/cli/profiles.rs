//
//  cloudinary-admin
//  cli/profiles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Streaming profile commands
//!
//! Each `--representation` is a canonical transformation string:
//!
//! ```bash
//! cld profiles create custom_hd --display-name "Custom HD" \
//!     --representation c_limit,w_1200,h_1200,br_5m \
//!     --representation c_limit,w_800,h_800,br_2m
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::transformation::{Representation, Transformation};

use super::{FieldArgs, GlobalOptions};

#[derive(Args, Debug)]
pub struct ProfilesCommand {
    #[command(subcommand)]
    pub command: ProfilesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfilesSubcommand {
    /// List predefined and custom streaming profiles
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a streaming profile
    Get(NameArgs),

    /// Create a custom streaming profile
    Create(CreateArgs),

    /// Update a streaming profile
    Update(UpdateArgs),

    /// Delete a custom profile, or reset a predefined one
    Delete(NameArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    pub name: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    pub name: String,

    #[arg(long)]
    pub display_name: Option<String>,

    /// Transformation of one representation (repeatable)
    #[arg(long = "representation", required = true, action = clap::ArgAction::Append)]
    pub representations: Vec<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub name: String,

    #[arg(long)]
    pub display_name: Option<String>,

    /// Replacement representations (repeatable)
    #[arg(long = "representation", action = clap::ArgAction::Append)]
    pub representations: Vec<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

fn representations(raw: &[String]) -> Vec<Representation> {
    raw.iter()
        .map(|s| Representation::new(Transformation::new().raw(s)))
        .collect()
}

impl ProfilesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;

        match &self.command {
            ProfilesSubcommand::List(args) => {
                global.respond(api.list_streaming_profiles(args.fields.to_options()?).await)
            }
            ProfilesSubcommand::Get(args) => global.respond(
                api.get_streaming_profile(&args.name, args.fields.to_options()?)
                    .await,
            ),
            ProfilesSubcommand::Create(args) => {
                let representations = representations(&args.representations);
                global.respond(
                    api.create_streaming_profile(
                        &args.name,
                        args.display_name.as_deref(),
                        &representations,
                        args.fields.to_options()?,
                    )
                    .await,
                )
            }
            ProfilesSubcommand::Update(args) => {
                let representations = representations(&args.representations);
                let representations =
                    (!representations.is_empty()).then_some(representations.as_slice());
                global.respond(
                    api.update_streaming_profile(
                        &args.name,
                        args.display_name.as_deref(),
                        representations,
                        args.fields.to_options()?,
                    )
                    .await,
                )
            }
            ProfilesSubcommand::Delete(args) => global.respond(
                api.delete_streaming_profile(&args.name, args.fields.to_options()?)
                    .await,
            ),
        }
    }
}
