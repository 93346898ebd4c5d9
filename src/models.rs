//! Data structures produced while turning built asset names into fragments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::MergePolicy;

/// Classification of a built asset by the fragment it contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A JavaScript asset, referenced through a `<script>` tag.
    Script,
    /// A stylesheet asset, referenced through a `<link>` tag.
    Stylesheet,
}

impl AssetKind {
    /// Kinds in the order their fragments are emitted.
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Stylesheet];

    /// Fragment file name used when no explicit filename is configured.
    pub fn default_fragment_name(self) -> &'static str {
        match self {
            AssetKind::Script => "assets.js.html",
            AssetKind::Stylesheet => "assets.css.html",
        }
    }
}

/// A single generated tag: the literal markup for one classified asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFragment {
    /// Kind of asset the markup references.
    pub kind: AssetKind,
    /// Literal tag text, e.g. `<script src="app.js"></script>`.
    pub markup: String,
}

/// A finished fragment file: one output name and its newline-joined tag body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentFile {
    /// Output file name the fragment is registered under.
    pub filename: String,
    /// Concatenated tag markup for this file.
    pub content: String,
}

/// Everything one build invocation produced, in emit order.
///
/// Created fresh per build; kinds with zero matching assets contribute no
/// entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentArtifacts {
    /// Generated fragment files, scripts before stylesheets.
    pub files: Vec<FragmentFile>,
}

impl FragmentArtifacts {
    /// Returns `true` when no asset produced a fragment.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Convert into the host-facing mapping of fragment name to body.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.files
            .into_iter()
            .map(|file| (file.filename, file.content))
            .collect()
    }

    /// Merge the fragments into a host-owned output map.
    ///
    /// Under [`MergePolicy::Overwrite`] an existing entry is replaced
    /// wholesale; under [`MergePolicy::Append`] the prior body and the new
    /// body are joined with a single newline.
    pub fn merge_into(&self, assets: &mut BTreeMap<String, String>, policy: MergePolicy) {
        for file in &self.files {
            let merged = match (policy, assets.get(&file.filename)) {
                (MergePolicy::Append, Some(existing)) => {
                    format!("{existing}\n{}", file.content)
                }
                _ => file.content.clone(),
            };
            assets.insert(file.filename.clone(), merged);
        }
    }
}
