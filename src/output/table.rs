//
//  cloudinary-admin
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders Admin API list responses as terminal tables using `comfy_table`.
//! Each known list field (`resources`, `transformations`, `presets`, ...)
//! has a fixed set of columns; values are pulled out of each JSON item by
//! key.
//!
//! ```rust,ignore
//! use cloudinary_admin::output::table::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["Public ID", "Format"])
//!     .row(["sample", "jpg"])
//!     .build();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use crate::util::{format_size, format_timestamp, truncate};

/// Column widths beyond which cell text is shortened.
const MAX_CELL: usize = 60;

/// A list field and the item keys shown as its columns.
pub struct ListView {
    pub field: &'static str,
    pub columns: &'static [&'static str],
}

/// Known list fields, checked in order.
pub const LIST_VIEWS: &[ListView] = &[
    ListView {
        field: "resources",
        columns: &["public_id", "resource_type", "type", "format", "bytes", "created_at"],
    },
    ListView {
        field: "derived",
        columns: &["id", "public_id", "format", "bytes"],
    },
    ListView {
        field: "transformations",
        columns: &["name", "named", "used", "allowed_for_strict"],
    },
    ListView {
        field: "presets",
        columns: &["name", "unsigned"],
    },
    ListView {
        field: "mappings",
        columns: &["folder", "template"],
    },
    ListView {
        field: "folders",
        columns: &["name", "path"],
    },
    ListView {
        field: "data",
        columns: &["name", "display_name", "predefined"],
    },
    ListView {
        field: "tags",
        columns: &[],
    },
    ListView {
        field: "resource_types",
        columns: &[],
    },
];

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for a table with a header row.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Renders one JSON value for a cell in column `column`.
pub fn format_cell(column: &str, value: Option<&Value>, color: bool) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::Bool(b)) => format_bool(*b, color),
        Some(Value::Number(n)) if column == "bytes" => n
            .as_u64()
            .map(format_size)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) if column == "created_at" => format_timestamp(s),
        Some(Value::String(s)) => truncate(s, MAX_CELL),
        Some(other) => truncate(&other.to_string(), MAX_CELL),
    }
}

/// Keys a list envelope may carry next to its list field.
const ENVELOPE_KEYS: &[&str] = &["next_cursor", "total_count"];

/// Finds the list view for a list envelope such as
/// `{"resources": [...], "next_cursor": "..."}`.
///
/// Detail bodies carry arrays too (`tags`, `derived`), so any key outside
/// the list field and [`ENVELOPE_KEYS`] means the body is not a list.
pub fn find_list_view(body: &serde_json::Map<String, Value>) -> Option<&'static ListView> {
    let view = LIST_VIEWS
        .iter()
        .find(|view| body.get(view.field).map_or(false, Value::is_array))?;
    body.keys()
        .all(|key| key == view.field || ENVELOPE_KEYS.contains(&key.as_str()))
        .then_some(view)
}

/// Builds a table for the items of a list field.
pub fn list_table(view: &ListView, items: &[Value], color: bool) -> Table {
    if view.columns.is_empty() {
        let builder = TableBuilder::new().color(color).headers([view.field]);
        return items
            .iter()
            .fold(builder, |b, item| b.row([format_cell(view.field, Some(item), color)]))
            .build();
    }

    let builder = TableBuilder::new().color(color).headers(view.columns.iter().copied());
    items
        .iter()
        .fold(builder, |b, item| {
            b.row(
                view.columns
                    .iter()
                    .map(|column| format_cell(column, item.get(*column), color)),
            )
        })
        .build()
}
