use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Collect the asset names present under a bundler's output directory.
///
/// Names are reported relative to `dir` with `/` separators, dot-files are
/// skipped, and entries are visited in sorted order per directory so repeated
/// scans of the same tree are deterministic.
pub fn collect_asset_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    collect_into(dir, "", &mut names)?;
    Ok(names)
}

fn collect_into(dir: &Path, relative_root: &str, names: &mut Vec<String>) -> Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("failed to read output directory at {}", dir.display()))?
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("failed to read an entry of {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let relative = if relative_root.is_empty() {
            name.to_owned()
        } else {
            format!("{relative_root}/{name}")
        };

        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to inspect {}", entry.path().display()))?;
        if file_type.is_dir() {
            collect_into(&entry.path(), &relative, names)?;
        } else {
            names.push(relative);
        }
    }

    Ok(())
}
