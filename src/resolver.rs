//! Candidate path resolution for one library item record.
//!
//! Two strategies are kept for backward compatibility with the historical
//! record layouts. Absolute-mode records (older libraries) store full paths
//! in every reference; relative-mode records (current libraries) store
//! references relative to the item folder. A field that cannot be composed
//! or points at nothing on disk degrades to absence without aborting the
//! rest of the item.

use std::path::{Path, PathBuf};

use log::debug;

use crate::display::RendererMode;
use crate::fs_resolve::{join_path, leaf_name, parent_directory, validate_existing};
use crate::record::{RawMetadataRecord, WallpaperKind};

/// Fixed side-car file name the playback components read tweakable wallpaper
/// settings from. Lives beside the wallpaper file (relative-mode) or in its
/// parent directory (absolute-mode).
pub const PROPERTIES_FILE_NAME: &str = "wallpaper.properties.json";

/// Caller-supplied resolution environment, read once per descriptor.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Built-in properties file bundled with the video player, substituted
    /// when a video item ships none of its own.
    pub default_video_properties: PathBuf,
    /// Library renderer preference at construction time.
    pub renderer: RendererMode,
}

impl ResolveContext {
    pub fn new(default_video_properties: impl Into<PathBuf>, renderer: RendererMode) -> Self {
        Self {
            default_video_properties: default_video_properties.into(),
            renderer,
        }
    }
}

/// Candidate field set produced by one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Wallpaper file, or the verbatim remote address for remote kinds.
    pub file_path: Option<PathBuf>,
    pub preview_clip_path: Option<PathBuf>,
    pub thumbnail_path: Option<PathBuf>,
    pub properties_path: Option<PathBuf>,
}

/// Resolves every path field of a record against its item folder.
pub fn resolve_paths(
    record: &RawMetadataRecord,
    base_folder: &Path,
    ctx: &ResolveContext,
) -> ResolvedPaths {
    let mut resolved = if record.is_absolute_path {
        resolve_absolute_record(record, base_folder)
    } else {
        resolve_relative_record(record, base_folder)
    };

    // Video playback always needs some properties file to offer downstream
    // consumers; items that ship none get the bundled default.
    if matches!(record.kind, WallpaperKind::Video | WallpaperKind::VideoStream)
        && resolved.properties_path.is_none()
    {
        resolved.properties_path = Some(ctx.default_video_properties.clone());
    }

    resolved
}

/// Older records stored every reference as a full path, but preview and
/// thumbnail always live inside the item folder, so only their leaf names
/// are trusted here; the stored directory portion is discarded.
fn resolve_absolute_record(record: &RawMetadataRecord, base_folder: &Path) -> ResolvedPaths {
    let file_path = if record.kind.is_remote() {
        verbatim(&record.file_name)
    } else {
        existing_or_absent(verbatim(&record.file_name), "wallpaper file")
    };

    let preview_clip_path = existing_or_absent(
        leaf_name(&record.preview_file_name).and_then(|leaf| join_path(base_folder, leaf)),
        "preview clip",
    );
    let thumbnail_path = existing_or_absent(
        leaf_name(&record.thumbnail_file_name).and_then(|leaf| join_path(base_folder, leaf)),
        "thumbnail",
    );
    let properties_path = existing_or_absent(
        parent_directory(&record.file_name)
            .and_then(|parent| join_path(&parent, PROPERTIES_FILE_NAME)),
        "properties file",
    );

    ResolvedPaths {
        file_path,
        preview_clip_path,
        thumbnail_path,
        properties_path,
    }
}

/// Current records are self-consistent, so the full stored relative
/// reference is preserved, including any directory portion.
fn resolve_relative_record(record: &RawMetadataRecord, base_folder: &Path) -> ResolvedPaths {
    let (file_path, properties_path) = if record.kind.is_remote() {
        // Remote kinds carry a network address, not a disk location; no
        // join, no existence check, no properties file of their own.
        (verbatim(&record.file_name), None)
    } else {
        (
            existing_or_absent(
                join_path(base_folder, &record.file_name),
                "wallpaper file",
            ),
            existing_or_absent(
                join_path(base_folder, PROPERTIES_FILE_NAME),
                "properties file",
            ),
        )
    };

    let preview_clip_path = existing_or_absent(
        join_path(base_folder, &record.preview_file_name),
        "preview clip",
    );
    let thumbnail_path = existing_or_absent(
        join_path(base_folder, &record.thumbnail_file_name),
        "thumbnail",
    );

    ResolvedPaths {
        file_path,
        preview_clip_path,
        thumbnail_path,
        properties_path,
    }
}

fn verbatim(reference: &str) -> Option<PathBuf> {
    if reference.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(reference))
    }
}

fn existing_or_absent(candidate: Option<PathBuf>, what: &str) -> Option<PathBuf> {
    let path = candidate?;
    let shown = path.display().to_string();
    let validated = validate_existing(path);
    if validated.is_none() {
        debug!("{} reference {} points at nothing on disk", what, shown);
    }
    validated
}

#[cfg(test)]
mod tests {
    use super::{resolve_paths, ResolveContext, PROPERTIES_FILE_NAME};
    use crate::display::RendererMode;
    use crate::record::{RawMetadataRecord, WallpaperKind};
    use std::path::{Path, PathBuf};

    fn ctx() -> ResolveContext {
        ResolveContext::new("/opt/player/defaults/wallpaper.properties.json", RendererMode::Normal)
    }

    fn touch(path: &Path) {
        std::fs::write(path, b"x").expect("fixture should write");
    }

    #[test]
    fn test_relative_record_resolves_full_references() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        let base = folder.path();
        std::fs::create_dir(base.join("assets")).expect("fixture dir should create");
        touch(&base.join("scene.mp4"));
        touch(&base.join("assets/clip.gif"));
        touch(&base.join("thumb.jpg"));
        touch(&base.join(PROPERTIES_FILE_NAME));

        let record = RawMetadataRecord {
            kind: WallpaperKind::Video,
            file_name: "scene.mp4".to_string(),
            preview_file_name: "assets/clip.gif".to_string(),
            thumbnail_file_name: "thumb.jpg".to_string(),
            ..RawMetadataRecord::default()
        };
        let resolved = resolve_paths(&record, base, &ctx());

        assert_eq!(resolved.file_path, Some(base.join("scene.mp4")));
        // The directory portion of the stored reference is preserved.
        assert_eq!(resolved.preview_clip_path, Some(base.join("assets/clip.gif")));
        assert_eq!(resolved.thumbnail_path, Some(base.join("thumb.jpg")));
        assert_eq!(resolved.properties_path, Some(base.join(PROPERTIES_FILE_NAME)));
    }

    #[test]
    fn test_absolute_record_trusts_only_leaf_names() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        let base = folder.path();
        let wallpaper = base.join("scene.mp4");
        touch(&wallpaper);
        touch(&base.join("clip.gif"));
        touch(&base.join("thumb.jpg"));
        touch(&base.join(PROPERTIES_FILE_NAME));

        let record = RawMetadataRecord {
            kind: WallpaperKind::Image,
            is_absolute_path: true,
            file_name: wallpaper.to_string_lossy().to_string(),
            // Stored full paths point into a tree that no longer exists.
            preview_file_name: r"C:\old\assets\clip.gif".to_string(),
            thumbnail_file_name: "/old/assets/thumb.jpg".to_string(),
            ..RawMetadataRecord::default()
        };
        let resolved = resolve_paths(&record, base, &ctx());

        assert_eq!(resolved.file_path, Some(wallpaper));
        assert_eq!(resolved.preview_clip_path, Some(base.join("clip.gif")));
        assert_eq!(resolved.thumbnail_path, Some(base.join("thumb.jpg")));
        // Properties resolve against the wallpaper file's own directory.
        assert_eq!(resolved.properties_path, Some(base.join(PROPERTIES_FILE_NAME)));
    }

    #[test]
    fn test_absolute_and_relative_differ_on_same_leaf() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        let base = folder.path();
        std::fs::create_dir(base.join("assets")).expect("fixture dir should create");
        touch(&base.join("clip.gif"));
        touch(&base.join("assets/clip.gif"));

        let mut record = RawMetadataRecord {
            kind: WallpaperKind::Image,
            preview_file_name: "assets/clip.gif".to_string(),
            ..RawMetadataRecord::default()
        };

        let relative = resolve_paths(&record, base, &ctx());
        assert_eq!(relative.preview_clip_path, Some(base.join("assets/clip.gif")));

        record.is_absolute_path = true;
        let absolute = resolve_paths(&record, base, &ctx());
        assert_eq!(absolute.preview_clip_path, Some(base.join("clip.gif")));
    }

    #[test]
    fn test_remote_kind_bypasses_join_and_existence() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        let record = RawMetadataRecord {
            kind: WallpaperKind::VideoStream,
            file_name: "https://stream.example.com/live".to_string(),
            ..RawMetadataRecord::default()
        };
        let resolved = resolve_paths(&record, folder.path(), &ctx());

        assert_eq!(
            resolved.file_path,
            Some(PathBuf::from("https://stream.example.com/live"))
        );
    }

    #[test]
    fn test_video_fallback_properties() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        let record = RawMetadataRecord {
            kind: WallpaperKind::Video,
            file_name: "scene.mp4".to_string(),
            ..RawMetadataRecord::default()
        };
        let context = ctx();
        let resolved = resolve_paths(&record, folder.path(), &context);

        // No properties file in the folder: the bundled default steps in,
        // taken verbatim rather than existence-checked.
        assert_eq!(
            resolved.properties_path,
            Some(context.default_video_properties.clone())
        );

        // Non-video kinds get no substitute.
        let record = RawMetadataRecord {
            kind: WallpaperKind::Image,
            ..record
        };
        let resolved = resolve_paths(&record, folder.path(), &context);
        assert_eq!(resolved.properties_path, None);
    }

    #[test]
    fn test_degraded_fields_do_not_abort_the_rest() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        let base = folder.path();
        touch(&base.join("thumb.jpg"));

        let record = RawMetadataRecord {
            kind: WallpaperKind::Image,
            file_name: "missing.png".to_string(),
            preview_file_name: String::new(),
            thumbnail_file_name: "thumb.jpg".to_string(),
            ..RawMetadataRecord::default()
        };
        let resolved = resolve_paths(&record, base, &ctx());

        assert_eq!(resolved.file_path, None);
        assert_eq!(resolved.preview_clip_path, None);
        assert_eq!(resolved.thumbnail_path, Some(base.join("thumb.jpg")));
    }
}
