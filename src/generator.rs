//! The fragment generator: asset names in, fragment files out.

use crate::config::FragmentConfig;
use crate::fragments::{classify_asset, prefix_asset_name, render_tag};
use crate::models::{AssetKind, FragmentArtifacts, FragmentFile, TagFragment};

/// Generates HTML fragments for the js/css assets of one build.
///
/// Construction captures the configuration; [`generate`](Self::generate) is
/// then a pure function of the asset names it is handed and is intended to be
/// called once per build-completion event. It performs no I/O and cannot
/// fail: persisting the returned artifacts is the caller's job (see
/// [`FragmentArtifacts::merge_into`] and the `output` module).
#[derive(Debug, Clone, Default)]
pub struct FragmentGenerator {
    config: FragmentConfig,
}

impl FragmentGenerator {
    /// Create a generator for the provided configuration.
    pub fn new(config: FragmentConfig) -> Self {
        Self { config }
    }

    /// Produce fragment files for every js/css asset in `asset_names`.
    ///
    /// Tag order within a fragment follows the order the names were
    /// presented; kinds with no matching assets are omitted entirely. When
    /// both kinds resolve to the same output filename their bodies are
    /// merged into one file, scripts first.
    pub fn generate<I, S>(&self, asset_names: I) -> FragmentArtifacts
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments: Vec<TagFragment> = asset_names
            .into_iter()
            .filter_map(|name| self.render_fragment(name.as_ref()))
            .collect();

        tracing::debug!(
            scripts = count_of(&fragments, AssetKind::Script),
            stylesheets = count_of(&fragments, AssetKind::Stylesheet),
            "classified build assets"
        );

        let mut files: Vec<FragmentFile> = Vec::new();
        for kind in AssetKind::ALL {
            let content = join_markup(&fragments, kind);
            if content.is_empty() {
                continue;
            }

            let filename = self.fragment_name(kind);
            match files.iter().position(|file| file.filename == filename) {
                Some(index) => {
                    let existing = &mut files[index];
                    existing.content.push('\n');
                    existing.content.push_str(&content);
                }
                None => files.push(FragmentFile { filename, content }),
            }
        }

        FragmentArtifacts { files }
    }

    fn render_fragment(&self, asset_name: &str) -> Option<TagFragment> {
        let kind = classify_asset(asset_name)?;
        let options = self.config.options_for(kind);
        let reference =
            prefix_asset_name(options.prepend_path.as_deref().unwrap_or(""), asset_name);

        Some(TagFragment {
            kind,
            markup: render_tag(kind, &reference, &options.tag_props),
        })
    }

    fn fragment_name(&self, kind: AssetKind) -> String {
        self.config
            .options_for(kind)
            .filename
            .clone()
            .unwrap_or_else(|| kind.default_fragment_name().to_owned())
    }
}

fn join_markup(fragments: &[TagFragment], kind: AssetKind) -> String {
    fragments
        .iter()
        .filter(|fragment| fragment.kind == kind)
        .map(|fragment| fragment.markup.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_owned()
}

fn count_of(fragments: &[TagFragment], kind: AssetKind) -> usize {
    fragments
        .iter()
        .filter(|fragment| fragment.kind == kind)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn generator(config: serde_json::Value) -> FragmentGenerator {
        FragmentGenerator::new(FragmentConfig::from_value(config))
    }

    #[test]
    fn emits_script_tags_in_input_order() {
        let artifacts =
            FragmentGenerator::default().generate(["app1.bundle.js", "app2.bundle.js"]);

        assert_eq!(artifacts.files, vec![FragmentFile {
            filename: "assets.js.html".into(),
            content: "<script src=\"app1.bundle.js\"></script>\n\
                      <script src=\"app2.bundle.js\"></script>"
                .into(),
        }]);
    }

    #[test]
    fn emits_stylesheet_tags_with_configured_attributes() {
        let generator = generator(json!({
            "css": {"tagProps": {"id": "x", "class": "y"}}
        }));

        let artifacts = generator.generate(["app.bundle.css"]);

        assert_eq!(artifacts.files, vec![FragmentFile {
            filename: "assets.css.html".into(),
            content: r#"<link rel="stylesheet" type="text/css" href="app.bundle.css" id="x" class="y">"#
                .into(),
        }]);
    }

    #[test]
    fn splits_mixed_assets_into_one_fragment_per_kind() {
        let artifacts = FragmentGenerator::default().generate([
            "app.bundle.js",
            "app.bundle.css",
            "logo.png",
            "app.wasm",
        ]);

        assert_eq!(artifacts.files.len(), 2);
        assert_eq!(artifacts.files[0].filename, "assets.js.html");
        assert_eq!(artifacts.files[1].filename, "assets.css.html");
        for file in &artifacts.files {
            assert!(!file.content.contains("logo.png"));
            assert!(!file.content.contains("app.wasm"));
        }
    }

    #[test]
    fn omits_kinds_with_no_matching_assets() {
        let artifacts = FragmentGenerator::default().generate(["app.bundle.js", "logo.png"]);

        assert_eq!(artifacts.files.len(), 1);
        assert_eq!(artifacts.files[0].filename, "assets.js.html");
    }

    #[test]
    fn produces_no_artifacts_without_js_or_css_assets() {
        let artifacts = FragmentGenerator::default().generate(["logo.png", "readme.txt"]);

        assert!(artifacts.is_empty());
    }

    #[test]
    fn prepends_the_configured_path_to_references() {
        let generator = generator(json!({"js": {"prependPath": "/static"}}));

        let artifacts = generator.generate(["app.bundle.js"]);

        assert_eq!(
            artifacts.files[0].content,
            r#"<script src="/static/app.bundle.js"></script>"#
        );
    }

    #[test]
    fn renames_the_fragment_file_per_kind() {
        let generator = generator(json!({"js": {"filename": "js-tags.html"}}));

        let artifacts = generator.generate(["app.bundle.js", "app.bundle.css"]);

        assert_eq!(artifacts.files[0].filename, "js-tags.html");
        assert_eq!(artifacts.files[1].filename, "assets.css.html");
    }

    #[test]
    fn merges_bodies_when_kinds_share_a_filename() {
        let generator = generator(json!({
            "js": {"filename": "includes.html"},
            "css": {"filename": "includes.html"}
        }));

        let artifacts = generator.generate(["app.bundle.js", "app.bundle.css"]);

        assert_eq!(artifacts.files, vec![FragmentFile {
            filename: "includes.html".into(),
            content: "<script src=\"app.bundle.js\"></script>\n\
                      <link rel=\"stylesheet\" type=\"text/css\" href=\"app.bundle.css\">"
                .into(),
        }]);
    }

    #[test]
    fn malformed_options_behave_like_defaults() {
        let generator = generator(json!({"js": 2, "css": {"x": 4}}));
        let names = ["app1.bundle.js", "app1.bundle.css"];

        assert_eq!(
            generator.generate(names),
            FragmentGenerator::default().generate(names)
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = generator(json!({"js": {"tagProps": {"defer": "defer"}}}));
        let names = ["app1.bundle.js", "app2.bundle.js", "app.bundle.css"];

        assert_eq!(generator.generate(names), generator.generate(names));
    }

    #[test]
    fn interleaved_input_keeps_per_kind_order() {
        let artifacts = FragmentGenerator::default().generate([
            "b.bundle.js",
            "a.bundle.css",
            "a.bundle.js",
        ]);

        assert_eq!(
            artifacts.files[0].content,
            "<script src=\"b.bundle.js\"></script>\n<script src=\"a.bundle.js\"></script>"
        );
    }
}
