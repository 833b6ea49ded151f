//
//  cloudinary-admin
//  cli/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource management commands
//!
//! ```bash
//! cld resources list -t upload -F prefix=samples/ --all
//! cld resources get sample -F colors=true
//! cld resources tag holiday
//! cld resources update sample -F 'tags=["a","b"]' -F moderation_status=approved
//! cld resources delete sample other
//! cld resources publish --prefix private/
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::common::with_cursor;
use crate::api::{collect_pages, Api, ApiResult, Options};

use super::{FieldArgs, GlobalOptions, TypeArgs};

#[derive(Args, Debug)]
pub struct ResourcesCommand {
    #[command(subcommand)]
    pub command: ResourcesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ResourcesSubcommand {
    /// List resources
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show details of a resource
    Get(PublicIdArgs),

    /// List resources with a tag
    Tag(TagArgs),

    /// Show several resources by public id
    Ids(PublicIdsArgs),

    /// List resources in a moderation queue
    Moderation(ModerationArgs),

    /// Update tags, context, coordinates or moderation status
    Update(PublicIdArgs),

    /// Delete resources by public id
    Delete(PublicIdsArgs),

    /// Delete resources whose public id starts with a prefix
    #[command(name = "delete-prefix")]
    DeletePrefix(PrefixArgs),

    /// Delete resources with a tag
    #[command(name = "delete-tag")]
    DeleteTag(DeleteTagArgs),

    /// Delete every resource of a resource and delivery type
    #[command(name = "delete-all")]
    DeleteAll(DeleteAllArgs),

    /// Delete derived resources by id
    #[command(name = "delete-derived")]
    DeleteDerived(DerivedArgs),

    /// Restore deleted resources from backup
    Restore(PublicIdsArgs),

    /// Publish authenticated resources
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Follow next_cursor and list every page
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct PublicIdArgs {
    /// Public id of the resource
    pub public_id: String,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct PublicIdsArgs {
    /// Public ids of the resources
    #[arg(required = true)]
    pub public_ids: Vec<String>,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    pub tag: String,

    /// Follow next_cursor and list every page
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct DeleteTagArgs {
    pub tag: String,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct ModerationArgs {
    /// Moderation kind, e.g. manual, webpurify
    pub kind: String,

    /// Moderation status: pending, approved or rejected
    pub status: String,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct PrefixArgs {
    pub prefix: String,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct DeleteAllArgs {
    /// Confirm deleting every resource
    #[arg(long)]
    pub yes: bool,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct DerivedArgs {
    /// Ids of the derived resources
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
#[group(id = "selector", required = true, multiple = false)]
pub struct PublishArgs {
    /// Publish resources whose public id starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Publish resources with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Publish these public ids
    #[arg(long, num_args = 1..)]
    pub ids: Option<Vec<String>>,

    #[command(flatten)]
    pub types: TypeArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

fn call_options(types: &TypeArgs, fields: &FieldArgs) -> Result<Options> {
    Ok(types.apply(fields.to_options()?))
}

impl ResourcesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let api = global.api()?;

        match &self.command {
            ResourcesSubcommand::List(args) => {
                let options = call_options(&args.types, &args.fields)?;
                if args.all {
                    return list_all(&api, global, options, |api, options| async move {
                        api.resources(options).await
                    })
                    .await;
                }
                global.respond(api.resources(options).await)
            }
            ResourcesSubcommand::Get(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.resource(&args.public_id, options).await)
            }
            ResourcesSubcommand::Tag(args) => {
                let options = call_options(&args.types, &args.fields)?;
                if args.all {
                    let tag = args.tag.clone();
                    return list_all(&api, global, options, move |api, options| {
                        let tag = tag.clone();
                        async move { api.resources_by_tag(&tag, options).await }
                    })
                    .await;
                }
                global.respond(api.resources_by_tag(&args.tag, options).await)
            }
            ResourcesSubcommand::Ids(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.resources_by_ids(&args.public_ids, options).await)
            }
            ResourcesSubcommand::Moderation(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(
                    api.resources_by_moderation(&args.kind, &args.status, options)
                        .await,
                )
            }
            ResourcesSubcommand::Update(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.update(&args.public_id, options).await)
            }
            ResourcesSubcommand::Delete(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.delete_resources(&args.public_ids, options).await)
            }
            ResourcesSubcommand::DeletePrefix(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.delete_resources_by_prefix(&args.prefix, options).await)
            }
            ResourcesSubcommand::DeleteTag(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.delete_resources_by_tag(&args.tag, options).await)
            }
            ResourcesSubcommand::DeleteAll(args) => {
                if !args.yes {
                    bail!("Refusing to delete every resource without --yes");
                }
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.delete_all_resources(options).await)
            }
            ResourcesSubcommand::DeleteDerived(args) => {
                let options = args.fields.to_options()?;
                global.respond(api.delete_derived_resources(&args.ids, options).await)
            }
            ResourcesSubcommand::Restore(args) => {
                let options = call_options(&args.types, &args.fields)?;
                global.respond(api.restore(&args.public_ids, options).await)
            }
            ResourcesSubcommand::Publish(args) => {
                let options = call_options(&args.types, &args.fields)?;
                let result = if let Some(prefix) = &args.prefix {
                    api.publish_by_prefix(prefix, options).await
                } else if let Some(tag) = &args.tag {
                    api.publish_by_tag(tag, options).await
                } else if let Some(ids) = &args.ids {
                    api.publish_by_ids(ids, options).await
                } else {
                    bail!("One of --prefix, --tag or --ids is required");
                };
                global.respond(result)
            }
        }
    }
}

/// Lists every page of `resources` and prints them as one list.
async fn list_all<F, Fut>(api: &Api, global: &GlobalOptions, options: Options, mut fetch: F) -> Result<()>
where
    F: FnMut(Api, Options) -> Fut,
    Fut: std::future::Future<Output = ApiResult>,
{
    let resources = collect_pages("resources", |cursor| fetch(api.clone(), with_cursor(&options, cursor))).await?;
    global.output().write_items("resources", &resources)
}
