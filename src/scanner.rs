use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::extractor::extract_snippets;
use crate::traversal::{TraversalOptions, collect_files};
use crate::types::SnippetMap;

/// Options for a scan, independent of the command line.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Source file extension, without the dot.
    pub extension: String,
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "rs".to_string(),
            follow_symlinks: false,
        }
    }
}

/// Scans every eligible file under `root` and accumulates its snippets.
///
/// # Errors
/// Fails on the first unreadable file or unterminated snippet; nothing is
/// returned for the files scanned before it.
pub fn scan_path(root: &Path, opts: &ScanOptions) -> Result<SnippetMap> {
    let files = discover(root, opts)?;
    scan_files(&files, |_| {})
}

/// Lists the files a scan of `root` would visit, in visiting order.
///
/// # Errors
/// Returns an error if `root` does not exist.
pub fn discover(root: &Path, opts: &ScanOptions) -> Result<Vec<PathBuf>> {
    let traversal = TraversalOptions {
        follow_symlinks: opts.follow_symlinks,
        extension: opts.extension.trim().trim_start_matches('.').to_string(),
    };
    info!(
        "scanning {} for .{} files",
        root.display(),
        traversal.extension
    );
    let files = collect_files(root, &traversal)?;
    info!("found {} files to scan", files.len());
    Ok(files)
}

/// Scans `files` in order, calling `on_file` after each one.
///
/// # Errors
/// See [`scan_path`].
pub fn scan_files<P, F>(files: &[P], mut on_file: F) -> Result<SnippetMap>
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let mut snippets = SnippetMap::new();
    for path in files {
        let path = path.as_ref();
        scan_file(path, &mut snippets)?;
        on_file(path);
    }
    Ok(snippets)
}

/// Adds the snippets of a single file to `snippets`.
///
/// # Errors
/// Returns an error if the file cannot be read as UTF-8 text or contains an
/// unterminated snippet.
pub fn scan_file(path: &Path, snippets: &mut SnippetMap) -> Result<()> {
    debug!("scanning {}", path.display());
    // the handle is closed by the time extraction can fail
    let content =
        fs::read_to_string(path).with_context(|| format!("read file: {}", path.display()))?;
    let occurrences =
        extract_snippets(&content).with_context(|| format!("extract: {}", path.display()))?;
    for occ in &occurrences {
        debug!(
            "{}:{}: snippet `{}` ({} deps)",
            path.display(),
            occ.line,
            occ.name,
            occ.dependencies.len()
        );
        snippets.add(occ);
    }
    Ok(())
}
