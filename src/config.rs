//! Generator configuration: per-kind tag options and the output merge policy.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::AssetKind;

const DEFAULT_CONFIG_FILE: &str = "fragments.config.json";

/// Per-kind tag configuration.
///
/// Every field is optional. Anything absent or malformed in the source JSON
/// falls back to its default rather than failing the build: a broken tag
/// attribute is a cosmetic mistake, not an infrastructure problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    /// Output fragment name overriding the per-kind default.
    pub filename: Option<String>,
    /// Extra attributes applied verbatim to every tag, in configured order.
    pub tag_props: Vec<(String, String)>,
    /// Prefix joined onto each asset name before use as the tag reference.
    pub prepend_path: Option<String>,
}

impl TagOptions {
    /// Extract options from a JSON value.
    ///
    /// A non-object value means "no configuration for this kind" and yields
    /// the defaults; within an object, only fields of the expected type are
    /// honoured. `tagProps` keeps its insertion order.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let tag_props = map
            .get("tagProps")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .filter_map(|(key, value)| {
                        value.as_str().map(|value| (key.clone(), value.to_owned()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            filename: map
                .get("filename")
                .and_then(Value::as_str)
                .map(str::to_owned),
            tag_props,
            prepend_path: map
                .get("prependPath")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// How a newly generated fragment combines with an existing output entry of
/// the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Each build replaces the prior fragment wholesale, so its content
    /// reflects exactly the current build's asset set.
    #[default]
    Overwrite,
    /// New bodies are appended to the existing entry, separated by a newline.
    Append,
}

impl MergePolicy {
    fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some(policy) if policy.eq_ignore_ascii_case("append") => MergePolicy::Append,
            _ => MergePolicy::default(),
        }
    }
}

/// Complete generator configuration as recognised from the host's JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FragmentConfig {
    /// Options for script (`.js`) assets.
    #[serde(deserialize_with = "lenient_tag_options")]
    pub js: TagOptions,
    /// Options for stylesheet (`.css`) assets.
    #[serde(deserialize_with = "lenient_tag_options")]
    pub css: TagOptions,
    /// Output merge policy applied when fragments are persisted.
    #[serde(deserialize_with = "lenient_merge_policy")]
    pub merge: MergePolicy,
}

impl FragmentConfig {
    /// Interpret a JSON value as configuration.
    ///
    /// Malformed parts degrade to their defaults; a non-object value degrades
    /// to the all-default configuration.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        let value = serde_json::from_str(&content).ok()?;
        Some(Self::from_value(value))
    }

    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so the build can continue with sensible
    /// assumptions.
    pub fn discover(dir: &Path) -> Self {
        Self::from_path(&dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
    }

    /// Tag options for one asset kind.
    pub fn options_for(&self, kind: AssetKind) -> &TagOptions {
        match kind {
            AssetKind::Script => &self.js,
            AssetKind::Stylesheet => &self.css,
        }
    }
}

fn lenient_tag_options<'de, D>(deserializer: D) -> Result<TagOptions, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(TagOptions::from_value(&Value::deserialize(deserializer)?))
}

fn lenient_merge_policy<'de, D>(deserializer: D) -> Result<MergePolicy, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(MergePolicy::from_value(&Value::deserialize(deserializer)?))
}
