//! Custom deserializers for quirky EPG XML attribute values.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

use crate::types::Image;

/// Deserializes a numeric attribute, treating an empty value as the type's default.
pub fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(v) => v
            .parse::<T>()
            .map_err(|e| D::Error::custom(format!("failed to parse {:?}: {}", v, e))),
    }
}

/// Deserializes a flag attribute.
///
/// Empty values are `false`; `1`, `t`, `true` and `0`, `f`, `false` are accepted in
/// lower, upper or title case.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(v) => Err(D::Error::custom(format!("invalid boolean {:?}", v))),
    }
}

/// `Resources` wrapper around a program's images.
#[derive(Debug, Default, Deserialize)]
struct Resources {
    #[serde(rename = "Image", default)]
    images: Vec<Image>,
}

/// Deserializes `<Resources><Image .../>...</Resources>` into the images it contains.
pub fn resources_images<'de, D>(deserializer: D) -> Result<Vec<Image>, D::Error>
where
    D: Deserializer<'de>,
{
    let resources = Option::<Resources>::deserialize(deserializer)?;
    Ok(resources.map(|r| r.images).unwrap_or_default())
}
