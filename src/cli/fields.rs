//
//  cloudinary-admin
//  cli/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Option fields given on the command line.
//!
//! Every Admin command accepts repeatable `-F key=value` fields that become
//! the operation's options. Values are typed the way JSON would read them:
//!
//! ```bash
//! cld resources list -F max_results=50 -F tags=true
//! cld resources update sample -F 'tags=["a","b"]' -F context.alt=Beach
//! cld presets create -F name=avatars -F unsigned=true
//! ```
//!
//! A dotted key (`context.alt`) builds a nested map. `--raw-field` keeps the
//! value as a string.

use anyhow::{bail, Result};
use clap::Args;
use serde_json::{Map, Value};

use crate::api::Options;

#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Add an option with a typed value (key=value, repeatable)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Add an option with a string value (key=value, repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,
}

impl FieldArgs {
    /// Builds the options map from every field given.
    pub fn to_options(&self) -> Result<Options> {
        let mut map = Map::new();

        for field in &self.field {
            let (key, value) = parse_field(field)?;
            set_nested_value(&mut map, key, value);
        }
        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut map, key, Value::String(value.to_string()));
        }

        Ok(Options::from(map))
    }
}

/// `--resource-type` and `--type` shortcuts for the path options.
#[derive(Args, Debug, Clone, Default)]
pub struct TypeArgs {
    /// Resource type: image, video or raw [default: image]
    #[arg(long, short = 'r')]
    pub resource_type: Option<String>,

    /// Delivery type, e.g. upload, private, authenticated
    #[arg(long = "type", short = 't')]
    pub delivery_type: Option<String>,
}

impl TypeArgs {
    /// Adds the given types to `options`, overriding `-F` fields.
    pub fn apply(&self, mut options: Options) -> Options {
        if let Some(resource_type) = &self.resource_type {
            options.insert("resource_type", resource_type.as_str());
        }
        if let Some(delivery_type) = &self.delivery_type {
            options.insert("type", delivery_type.as_str());
        }
        options
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Parses `key=value`, reading the value as a JSON literal where it looks like
/// one and as a string otherwise.
pub fn parse_field(field: &str) -> Result<(&str, Value)> {
    let (key, raw) = split_field(field)?;

    let value = match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = raw.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .and_then(serde_json::Number::from_f64)
            {
                Value::Number(n)
            } else if raw.starts_with('[') || raw.starts_with('{') {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
            } else {
                Value::String(raw.to_string())
            }
        }
    };

    Ok((key, value))
}

/// Inserts `value` at a dotted key path, creating intermediate maps.
pub fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_types() {
        assert_eq!(parse_field("max_results=10").unwrap(), ("max_results", json!(10)));
        assert_eq!(parse_field("colors=true").unwrap(), ("colors", json!(true)));
        assert_eq!(parse_field("width=2.5").unwrap(), ("width", json!(2.5)));
        assert_eq!(parse_field("tags=[\"a\",\"b\"]").unwrap(), ("tags", json!(["a", "b"])));
        assert_eq!(parse_field("prefix=samples/").unwrap(), ("prefix", json!("samples/")));
        assert_eq!(parse_field("template=a=b").unwrap(), ("template", json!("a=b")));
    }

    #[test]
    fn test_parse_field_rejects_missing_equals() {
        assert!(parse_field("max_results").is_err());
        assert!(parse_field("=5").is_err());
    }

    #[test]
    fn test_nested_fields() {
        let args = FieldArgs {
            field: vec!["context.alt=Beach".into(), "context.caption=Sun".into()],
            raw_field: vec!["public_id=00123".into()],
        };
        let options = args.to_options().unwrap();
        assert_eq!(options.get("context"), Some(&json!({"alt": "Beach", "caption": "Sun"})));
        assert_eq!(options.get("public_id"), Some(&json!("00123")));
    }

    #[test]
    fn test_type_args_override_fields() {
        let types = TypeArgs {
            resource_type: Some("video".into()),
            delivery_type: None,
        };
        let options = types.apply(Options::new().with("resource_type", "image").with("type", "private"));
        assert_eq!(options.str("resource_type").as_deref(), Some("video"));
        assert_eq!(options.str("type").as_deref(), Some("private"));
    }

    #[test]
    fn test_nan_stays_string() {
        assert_eq!(parse_field("x=NaN").unwrap().1, json!("NaN"));
    }
}
