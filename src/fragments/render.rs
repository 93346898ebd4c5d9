use crate::models::AssetKind;

use super::AttrWriter;

/// Render the literal tag markup for one classified asset.
///
/// Scripts become `<script src="...">` tags, stylesheets become
/// `<link rel="stylesheet" type="text/css" href="...">` tags; configured
/// attribute pairs follow the reference in order.
pub fn render_tag(kind: AssetKind, reference: &str, props: &[(String, String)]) -> String {
    let attrs = AttrWriter::new(props);
    match kind {
        AssetKind::Script => format!(r#"<script src="{reference}"{attrs}></script>"#),
        AssetKind::Stylesheet => {
            format!(r#"<link rel="stylesheet" type="text/css" href="{reference}"{attrs}>"#)
        }
    }
}

/// Join a configured prefix onto an asset name with exactly one `/`.
///
/// The result always uses forward slashes regardless of the separator the
/// asset name was discovered with. An empty prefix leaves the name untouched.
pub fn prefix_asset_name(prefix: &str, asset_name: &str) -> String {
    let asset_name = asset_name.replace('\\', "/");
    if prefix.is_empty() {
        return asset_name;
    }

    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        asset_name.trim_start_matches('/')
    )
}
