//
//  cloudinary-admin
//  api/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Write and upload parameter builders.
//!
//! Resource updates and upload preset definitions accept structured values
//! (tag lists, context maps, coordinate lists, transformations) that the
//! service expects in flattened string form. These builders pick the
//! recognized keys out of an options map and encode them.

use serde_json::Value;

use super::options::{value_as_string, Options};

/// Keys forwarded by [`write_parameters`] without re-encoding.
const WRITE_PASSTHROUGH: &[&str] = &[
    "ocr",
    "raw_convert",
    "categorization",
    "detection",
    "similarity_search",
    "background_removal",
    "auto_tagging",
    "access_control",
    "notification_url",
    "quality_override",
];

/// Scalar keys forwarded by [`upload_parameters`].
const UPLOAD_SCALARS: &[&str] = &[
    "public_id",
    "callback",
    "format",
    "type",
    "backup",
    "exif",
    "faces",
    "colors",
    "image_metadata",
    "invalidate",
    "use_filename",
    "unique_filename",
    "overwrite",
    "discard_original_filename",
    "eager_notification_url",
    "eager_async",
    "proxy",
    "folder",
    "moderation",
    "upload_preset",
    "return_delete_token",
    "phash",
    "async",
];

/// Joins a list into a single string, or passes a scalar through.
fn join_list(value: &Value, separator: &str) -> Option<String> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_as_string)
                .collect::<Vec<_>>()
                .join(separator),
        ),
        value => value_as_string(value),
    }
}

fn escape_context(value: &str) -> String {
    value.replace('=', "\\=").replace('|', "\\|")
}

/// Encodes a context map as `key=value|key2=value2`.
fn encode_context(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => Some(
            map.iter()
                .map(|(key, value)| {
                    let value = value_as_string(value).unwrap_or_default();
                    format!("{}={}", escape_context(key), escape_context(&value))
                })
                .collect::<Vec<_>>()
                .join("|"),
        ),
        value => value_as_string(value),
    }
}

/// Encodes `[[x, y, w, h], ...]` as `x,y,w,h|...`.
fn encode_coordinates(value: &Value) -> Option<String> {
    match value {
        Value::Array(rects) if rects.iter().all(Value::is_array) => Some(
            rects
                .iter()
                .filter_map(|rect| join_list(rect, ","))
                .collect::<Vec<_>>()
                .join("|"),
        ),
        Value::Array(_) => join_list(value, ","),
        value => value_as_string(value),
    }
}

/// Encodes a header map as `Key: Value` lines.
fn encode_headers(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => Some(
            map.iter()
                .map(|(key, value)| format!("{}: {}", key, value_as_string(value).unwrap_or_default()))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        value => join_list(value, "\n"),
    }
}

fn put(params: &mut Options, key: &str, value: Option<String>) {
    if let Some(value) = value {
        params.insert(key, value);
    }
}

/// Builds the parameters shared by resource updates and uploads.
///
/// # Example
///
/// ```rust
/// use cloudinary_admin::api::params::write_parameters;
/// use cloudinary_admin::options;
/// use serde_json::json;
///
/// let params = write_parameters(&options! {
///     "tags" => vec!["holiday", "beach"],
///     "context" => json!({"caption": "a=b"}),
///     "face_coordinates" => json!([[10, 11, 12, 13], [20, 21, 22, 23]]),
/// });
///
/// assert_eq!(params.str("tags").as_deref(), Some("holiday,beach"));
/// assert_eq!(params.str("context").as_deref(), Some("caption=a\\=b"));
/// assert_eq!(params.str("face_coordinates").as_deref(), Some("10,11,12,13|20,21,22,23"));
/// ```
pub fn write_parameters(options: &Options) -> Options {
    let mut params = Options::new();

    if let Some(tags) = options.get("tags") {
        put(&mut params, "tags", join_list(tags, ","));
    }
    if let Some(context) = options.get("context") {
        put(&mut params, "context", encode_context(context));
    }
    for key in ["face_coordinates", "custom_coordinates"] {
        if let Some(coordinates) = options.get(key) {
            put(&mut params, key, encode_coordinates(coordinates));
        }
    }
    if let Some(headers) = options.get("headers") {
        put(&mut params, "headers", encode_headers(headers));
    }

    params.extend(options.only(WRITE_PASSTHROUGH));
    params
}

/// Builds the parameters accepted by upload preset definitions.
///
/// Includes everything [`write_parameters`] produces. `transformation` may
/// be a [`Transformation`](crate::Transformation) (already a string once
/// converted) or a string; `eager` may be a list of them, joined with `|`.
pub fn upload_parameters(options: &Options) -> Options {
    let mut params = write_parameters(options);

    params.extend(options.only(UPLOAD_SCALARS));
    if let Some(transformation) = options.get("transformation") {
        put(&mut params, "transformation", value_as_string(transformation));
    }
    if let Some(eager) = options.get("eager") {
        put(&mut params, "eager", join_list(eager, "|"));
    }
    if let Some(formats) = options.get("allowed_formats") {
        put(&mut params, "allowed_formats", join_list(formats, ","));
    }

    params
}

/// Drops null values, empty strings and empty lists.
pub fn clear_empty(params: Options) -> Options {
    params
        .into_iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
        .collect()
}
