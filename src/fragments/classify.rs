use std::path::Path;

use crate::models::AssetKind;

/// Classify a built asset name by its filename extension.
///
/// Only `.js` and `.css` assets participate in fragment generation; anything
/// else returns `None` and is silently excluded. Matching is exact and
/// case-sensitive.
pub fn classify_asset(asset_name: &str) -> Option<AssetKind> {
    match Path::new(asset_name).extension()?.to_str()? {
        "js" => Some(AssetKind::Script),
        "css" => Some(AssetKind::Stylesheet),
        _ => None,
    }
}
