//
//  cloudinary-admin
//  cli/transformations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Transformation commands
//!
//! ```bash
//! cld transformations list --all
//! cld transformations get c_scale,w_100
//! cld transformations create thumbnail c_fill,h_150,w_150
//! cld transformations update thumbnail -F allowed_for_strict=true
//! cld transformations delete thumbnail
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::collect_pages;
use crate::api::common::with_cursor;

use super::{FieldArgs, GlobalOptions};

#[derive(Args, Debug)]
pub struct TransformationsCommand {
    #[command(subcommand)]
    pub command: TransformationsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TransformationsSubcommand {
    /// List named and derived transformations
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a transformation by name or definition
    Get(NameArgs),

    /// Create a named transformation
    Create(CreateArgs),

    /// Update a transformation; fields are sent as the updates
    Update(NameArgs),

    /// Delete a transformation
    Delete(NameArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Follow next_cursor and list every page
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Transformation name or canonical definition
    pub name: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new transformation
    pub name: String,

    /// Canonical definition, e.g. c_scale,w_100
    pub definition: String,

    #[command(flatten)]
    pub fields: FieldArgs,
}

impl TransformationsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;

        match &self.command {
            TransformationsSubcommand::List(args) => {
                let options = args.fields.to_options()?;
                if args.all {
                    let items = collect_pages("transformations", |cursor| {
                        let options = with_cursor(&options, cursor);
                        let api = api.clone();
                        async move { api.transformations(options).await }
                    })
                    .await?;
                    return global.output().write_items("transformations", &items);
                }
                global.respond(api.transformations(options).await)
            }
            TransformationsSubcommand::Get(args) => {
                let options = args.fields.to_options()?;
                global.respond(api.transformation(&args.name, options).await)
            }
            TransformationsSubcommand::Create(args) => {
                let options = args.fields.to_options()?;
                global.respond(
                    api.create_transformation(&args.name, &args.definition, options)
                        .await,
                )
            }
            TransformationsSubcommand::Update(args) => {
                let updates = args.fields.to_options()?;
                global.respond(api.update_transformation(&args.name, updates, None).await)
            }
            TransformationsSubcommand::Delete(args) => {
                let options = args.fields.to_options()?;
                global.respond(api.delete_transformation(&args.name, options).await)
            }
        }
    }
}
