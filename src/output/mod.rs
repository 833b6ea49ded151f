//
//  cloudinary-admin
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders Admin API responses for the terminal:
//!
//! - **Table format**: list responses as a table, other responses as
//!   `key: value` fields, followed by the pagination cursor and rate limit
//! - **JSON format**: the response body pretty-printed, unchanged
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudinary_admin::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_response(&response)?;
//! writer.write_success("Deleted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde_json::Value;

use crate::api::{ApiResponse, RateLimit};

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Writes responses and status messages in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write_response(&self, response: &ApiResponse) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(response),
            OutputFormat::Table => {
                self.print_response(response);
                Ok(())
            }
        }
    }

    /// Writes a list gathered across pages.
    pub fn write_items(&self, field: &str, items: &[Value]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&items),
            OutputFormat::Table => {
                match LIST_VIEWS.iter().find(|view| view.field == field) {
                    Some(view) => println!("{}", list_table(view, items, self.color)),
                    None => write_json(&items)?,
                }
                Ok(())
            }
        }
    }

    fn print_response(&self, response: &ApiResponse) {
        match find_list_view(response.as_map()) {
            Some(view) => {
                let items = response.list(view.field);
                if items.is_empty() {
                    self.write_info(&format!("No {} found", view.field.replace('_', " ")));
                } else {
                    println!("{}", list_table(view, items, self.color));
                }
            }
            None => {
                for (key, value) in response.iter().filter(|(key, _)| *key != "next_cursor") {
                    let text = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    print_field(key, &text, self.color);
                }
            }
        }

        if let Some(cursor) = response.next_cursor() {
            print_field("next_cursor", cursor, self.color);
        }
        if let Some(limit) = response.rate_limit() {
            print_field("rate_limit", &format_rate_limit(limit), self.color);
        }
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

pub fn format_rate_limit(limit: &RateLimit) -> String {
    match limit.reset {
        Some(reset) => format!(
            "{}/{} remaining, resets {}",
            limit.remaining,
            limit.limit,
            reset.format("%Y-%m-%d %H:%M UTC")
        ),
        None => format!("{}/{} remaining", limit.remaining, limit.limit),
    }
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
