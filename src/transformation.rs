//
//  cloudinary-admin
//  transformation.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transformations
//!
//! A transformation is a chain of components, each an unordered set of
//! parameters such as `crop` or `width`. The service identifies a
//! transformation by its canonical string: each component rendered as
//! `code_value` pairs sorted by code and joined with `,`, and components
//! joined with `/`.
//!
//! ```rust
//! use cloudinary_admin::Transformation;
//!
//! let t = Transformation::new().crop("scale").width(100);
//! assert_eq!(t.generate(), "c_scale,w_100");
//!
//! let chained = Transformation::new().width(200).chain().effect("sepia");
//! assert_eq!(chained.to_string(), "w_200/e_sepia");
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::api::options::value_as_string;

/// Long parameter names and their short codes.
const PARAMS: &[(&str, &str)] = &[
    ("angle", "a"),
    ("aspect_ratio", "ar"),
    ("audio_codec", "ac"),
    ("audio_frequency", "af"),
    ("background", "b"),
    ("bit_rate", "br"),
    ("border", "bo"),
    ("color", "co"),
    ("color_space", "cs"),
    ("crop", "c"),
    ("default_image", "d"),
    ("delay", "dl"),
    ("density", "dn"),
    ("dpr", "dpr"),
    ("duration", "du"),
    ("effect", "e"),
    ("end_offset", "eo"),
    ("fetch_format", "f"),
    ("flags", "fl"),
    ("gravity", "g"),
    ("height", "h"),
    ("if", "if"),
    ("keyframe_interval", "ki"),
    ("opacity", "o"),
    ("overlay", "l"),
    ("page", "pg"),
    ("prefix", "p"),
    ("quality", "q"),
    ("radius", "r"),
    ("start_offset", "so"),
    ("streaming_profile", "sp"),
    ("transformation", "t"),
    ("underlay", "u"),
    ("video_codec", "vc"),
    ("video_sampling", "vs"),
    ("width", "w"),
    ("x", "x"),
    ("y", "y"),
    ("zoom", "z"),
];

const RAW: &str = "raw_transformation";

fn short_code(name: &str) -> Option<&'static str> {
    PARAMS
        .iter()
        .find(|(long, _)| *long == name)
        .map(|(_, code)| *code)
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_as_string).collect();
            Some(parts.join(".")).filter(|s| !s.is_empty())
        }
        value => value_as_string(value).filter(|s| !s.is_empty()),
    }
}

fn render_component(component: &Map<String, Value>) -> String {
    let mut pairs: Vec<(&str, String)> = component
        .iter()
        .filter_map(|(name, value)| Some((short_code(name)?, render_value(value)?)))
        .collect();
    // "if" conditions lead their component.
    pairs.sort_by(|a, b| (a.0 != "if", a.0).cmp(&(b.0 != "if", b.0)));

    let mut parts: Vec<String> = pairs
        .into_iter()
        .map(|(code, value)| format!("{}_{}", code, value))
        .collect();
    if let Some(raw) = component.get(RAW).and_then(render_value) {
        parts.push(raw);
    }
    parts.join(",")
}

/// A chain of transformation components.
///
/// Builder methods set parameters on the last component; [`chain`](Self::chain)
/// starts a new one. Unknown parameter names are ignored when generating.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    components: Vec<Map<String, Value>>,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformation {
    pub fn new() -> Self {
        Self {
            components: vec![Map::new()],
        }
    }

    /// Builds a chain from the `info` array returned for a named
    /// transformation, one component per object.
    ///
    /// ```rust
    /// use cloudinary_admin::Transformation;
    /// use serde_json::json;
    ///
    /// let info = json!([{ "width": 100, "crop": "scale" }]);
    /// let t = Transformation::from_info(info.as_array().unwrap());
    /// assert_eq!(t.generate(), "c_scale,w_100");
    /// ```
    pub fn from_info(info: &[Value]) -> Self {
        let components: Vec<Map<String, Value>> = info
            .iter()
            .filter_map(Value::as_object)
            .cloned()
            .collect();
        if components.is_empty() {
            return Self::new();
        }
        Self { components }
    }

    /// Sets a parameter on the current component.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Some(current) = self.components.last_mut() {
            current.insert(name.into(), value.into());
        }
        self
    }

    /// Closes the current component and starts a new one.
    pub fn chain(mut self) -> Self {
        self.components.push(Map::new());
        self
    }

    pub fn width(self, width: impl Into<Value>) -> Self {
        self.param("width", width)
    }

    pub fn height(self, height: impl Into<Value>) -> Self {
        self.param("height", height)
    }

    pub fn crop(self, crop: &str) -> Self {
        self.param("crop", crop)
    }

    pub fn gravity(self, gravity: &str) -> Self {
        self.param("gravity", gravity)
    }

    pub fn quality(self, quality: impl Into<Value>) -> Self {
        self.param("quality", quality)
    }

    pub fn effect(self, effect: &str) -> Self {
        self.param("effect", effect)
    }

    pub fn angle(self, angle: impl Into<Value>) -> Self {
        self.param("angle", angle)
    }

    pub fn radius(self, radius: impl Into<Value>) -> Self {
        self.param("radius", radius)
    }

    pub fn fetch_format(self, format: &str) -> Self {
        self.param("fetch_format", format)
    }

    pub fn bit_rate(self, bit_rate: impl Into<Value>) -> Self {
        self.param("bit_rate", bit_rate)
    }

    pub fn video_codec(self, codec: &str) -> Self {
        self.param("video_codec", codec)
    }

    /// Applies a named transformation.
    pub fn named(self, name: &str) -> Self {
        self.param("transformation", name)
    }

    /// Appends a raw transformation string after the generated parameters.
    pub fn raw(self, raw: &str) -> Self {
        self.param(RAW, raw)
    }

    pub fn is_empty(&self) -> bool {
        self.generate().is_empty()
    }

    /// The canonical transformation string.
    pub fn generate(&self) -> String {
        self.components
            .iter()
            .map(render_component)
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

impl Serialize for Transformation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.generate())
    }
}

impl From<Transformation> for Value {
    fn from(transformation: Transformation) -> Self {
        Value::String(transformation.generate())
    }
}

/// One rendition of a streaming profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Representation {
    pub transformation: Transformation,
}

impl Representation {
    pub fn new(transformation: Transformation) -> Self {
        Self { transformation }
    }
}

impl From<Transformation> for Representation {
    fn from(transformation: Transformation) -> Self {
        Self::new(transformation)
    }
}
