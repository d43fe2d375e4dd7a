//! Failure-tolerant path composition and existence gating.
//!
//! Call sites use these helpers instead of manual concatenation so a bad
//! stored reference degrades to absence and the rest of an item's fields
//! still resolve.

use std::path::{Path, PathBuf};

/// Joins a stored file reference onto a base folder.
///
/// A blank base or blank reference cannot form a meaningful path and yields
/// absence. A rooted reference replaces the base, matching the platform join
/// semantics the historical records were written against.
pub fn join_path(base: &Path, reference: &str) -> Option<PathBuf> {
    if base.as_os_str().is_empty() || reference.trim().is_empty() {
        return None;
    }
    Some(base.join(reference))
}

/// Returns the path unchanged when a filesystem entry currently exists at
/// that location. Purely a point-in-time predicate, no caching: an asset
/// that is still downloading validates once it lands on disk.
pub fn validate_existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Final segment of a stored file reference.
///
/// Records written on Windows may carry `\` separators that `Path` does not
/// split on other platforms, so both separator families are honored.
pub fn leaf_name(reference: &str) -> Option<&str> {
    let trimmed = reference.trim().trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return None;
    }
    let leaf = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    // A drive-only reference like "C:" has no leaf to keep.
    if leaf.is_empty() || leaf.ends_with(':') {
        return None;
    }
    Some(leaf)
}

/// Parent directory of a stored absolute file reference.
pub fn parent_directory(reference: &str) -> Option<PathBuf> {
    let parent = Path::new(reference.trim()).parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    Some(parent.to_path_buf())
}
