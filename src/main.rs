//
//  cloudinary-admin
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cloudinary_admin::api::ApiError;
use cloudinary_admin::cli::{Cli, Commands};
use cloudinary_admin::exit_codes;
use cloudinary_admin::output::OutputWriter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::table().write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging from `CLD_DEBUG`, e.g. `CLD_DEBUG=cloudinary_admin=debug`
fn init_logging() {
    let filter = EnvFilter::try_from_env("CLD_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps API failures to distinct exit codes.
fn exit_code(error: &anyhow::Error) -> i32 {
    let Some(api_error) = error.downcast_ref::<ApiError>() else {
        return exit_codes::ERROR;
    };

    match api_error {
        ApiError::Config(_) => exit_codes::USAGE_ERROR,
        other => match other.status() {
            Some(401) | Some(403) => exit_codes::AUTH_ERROR,
            Some(404) => exit_codes::NOT_FOUND,
            Some(409) => exit_codes::ALREADY_EXISTS,
            Some(420) => exit_codes::RATE_LIMITED,
            _ => exit_codes::ERROR,
        },
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ping(args) => args.ping(&cli.global).await,
        Commands::Usage(args) => args.usage(&cli.global).await,
        Commands::ResourceTypes(args) => args.resource_types(&cli.global).await,
        Commands::Resources(cmd) => cmd.run(&cli.global).await,
        Commands::Tags(args) => args.run(&cli.global).await,
        Commands::Transformations(cmd) => cmd.run(&cli.global).await,
        Commands::Presets(cmd) => cmd.run(&cli.global).await,
        Commands::Mappings(cmd) => cmd.run(&cli.global).await,
        Commands::Profiles(cmd) => cmd.run(&cli.global).await,
        Commands::Folders(args) => args.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("cld version {}", cloudinary_admin::VERSION);
            Ok(())
        }
    }
}
