//
//  cloudinary-admin
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the account settings kept in the configuration file.
//! `get` and `show` display the effective settings, with `CLOUDINARY_URL`
//! layered over the file; `set` only touches the file. Secrets are never
//! printed back.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::Config;

use super::GlobalOptions;

/// Keys whose values are masked when shown.
const SECRET_KEYS: &[&str] = &["api_secret", "oauth_token"];

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Show all configuration values
    #[command(visible_aliases = ["list", "ls"])]
    Show,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Show => self.show(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::resolve(global.cloudinary_url.as_deref())?;
        let value = config.get(&args.key).map(|v| display_value(&args.key, &v));

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        let mut config = Config::load_from(&path)?;
        config.set(&args.key, args.value.as_str())?;
        config.save_to(&path)?;

        let shown = display_value(&args.key, &args.value);
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }

        Ok(())
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::resolve(global.cloudinary_url.as_deref())?;
        let entries: Vec<(&str, Option<String>)> = Config::KEYS
            .iter()
            .map(|key| (*key, config.get(key).map(|v| display_value(key, &v))))
            .collect();

        if global.json {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), serde_json::json!(value)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", "-".repeat(50));
        for (key, value) in entries {
            match value {
                Some(v) => println!("  {}: {}", style(key).cyan(), v),
                None => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
            }
        }
        println!();

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let config_path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }
}

fn display_value(key: &str, value: &str) -> String {
    if SECRET_KEYS.contains(&key) {
        mask(value)
    } else {
        value.to_string()
    }
}

/// Keeps the last four characters of a secret.
fn mask(value: &str) -> String {
    let count = value.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = value.chars().skip(count - 4).collect();
    format!("****{}", tail)
}
