use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;

pub struct TraversalOptions {
    pub follow_symlinks: bool,
    pub extension: String, // no dot, matched exactly
}

/// Collects every file under `root` carrying the wanted extension.
///
/// Hidden entries are included and ignore files are not honoured: a snippet
/// tree is scanned in full. Siblings are visited in file-name order.
///
/// # Errors
/// Any entry the walk cannot read, and any eligible entry whose metadata
/// cannot be read (a dangling symlink, say), fails the whole collection.
pub fn collect_files(root: &Path, opts: &TraversalOptions) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("path does not exist: {}", root.display());
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.follow_links(opts.follow_symlinks);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = dent.with_context(|| format!("walk: {}", root.display()))?;
        let path = dent.path();
        if !has_extension(path, &opts.extension) {
            continue;
        }
        let md = fs::metadata(path).with_context(|| format!("stat: {}", path.display()))?;
        if !md.is_file() {
            continue;
        }
        out.push(path.to_path_buf());
    }

    Ok(out)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension().is_some_and(|ext| ext == wanted)
}
