use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::MergePolicy;
use crate::models::FragmentArtifacts;

/// Write generated fragments into the bundler's output directory.
///
/// The directory itself must already exist — a missing output location is an
/// infrastructure problem that should fail the build. Parent directories are
/// created inside it when a configured fragment name carries a subdirectory
/// component. Under [`MergePolicy::Append`] an existing fragment file is read
/// first and the new body is joined to it with a single newline; the
/// read-then-write is sequential within one build. Returns the paths written.
pub fn write_fragments(
    dir: &Path,
    artifacts: &FragmentArtifacts,
    policy: MergePolicy,
) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("output directory does not exist at {}", dir.display());
    }

    let mut written = Vec::with_capacity(artifacts.files.len());
    for file in &artifacts.files {
        let path = dir.join(&file.filename);
        if let Some(parent) = path.parent()
            && parent != dir
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = match policy {
            MergePolicy::Append if path.exists() => {
                let mut existing = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                existing.push('\n');
                existing.push_str(&file.content);
                existing
            }
            _ => file.content.clone(),
        };

        fs::write(&path, &content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote fragment");
        written.push(path);
    }

    Ok(written)
}
