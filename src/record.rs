//! Raw side-car metadata model for one wallpaper library item.
//!
//! Each item folder carries a JSON record describing the wallpaper it holds.
//! This module defines the record as written on disk plus the enumerations it
//! references; path resolution consumes the in-memory record only.

use std::path::Path;

/// File name of the JSON record stored inside each item folder.
pub const METADATA_FILE_NAME: &str = "wallpaper.json";

/// Kind of content a library item renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WallpaperKind {
    /// Still picture.
    #[default]
    Image,
    /// Animated gif clip.
    Gif,
    /// Local video file.
    Video,
    /// Remote video stream address.
    VideoStream,
    /// Web page shipped inside the item folder.
    Web,
    /// Shipped web page reacting to audio.
    WebAudio,
    /// Remote web page address.
    Url,
    /// Native application wallpaper.
    App,
    Godot,
    Unity,
    UnityAudio,
    Bizhawk,
}

impl WallpaperKind {
    /// Remote kinds carry a network address in `file_name` instead of a file
    /// reference, so path joining and existence checks do not apply to them.
    pub fn is_remote(self) -> bool {
        matches!(self, WallpaperKind::Url | WallpaperKind::VideoStream)
    }
}

/// Externally assigned processing-pipeline marker. Stored verbatim on the
/// descriptor; this crate never derives or advances it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleTag {
    ConvertingToVideo,
    PendingLibraryAdd,
    Installing,
    Downloading,
    #[default]
    Ready,
}

/// One wallpaper item's side-car record as written next to its files.
///
/// `is_absolute_path` selects between the two historical layouts: older
/// records store full paths in every file reference, current records store
/// references relative to the item folder. All fields are input-tolerant so
/// a sparse or hand-edited record still loads.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawMetadataRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// Free-text contact or source reference, possibly a URL fragment.
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub kind: WallpaperKind,
    /// Wallpaper file reference, or the remote address for remote kinds.
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub preview_file_name: String,
    #[serde(default)]
    pub thumbnail_file_name: String,
    #[serde(default)]
    pub is_absolute_path: bool,
}

/// Loads the side-car record from an item folder.
pub fn read_metadata_record(folder: &Path) -> Result<RawMetadataRecord, String> {
    let record_path = folder.join(METADATA_FILE_NAME);
    let record_text = std::fs::read_to_string(&record_path)
        .map_err(|err| format!("failed to read {}: {}", record_path.display(), err))?;
    serde_json::from_str(&record_text)
        .map_err(|err| format!("failed to parse {}: {}", record_path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::{read_metadata_record, LifecycleTag, RawMetadataRecord, WallpaperKind};

    #[test]
    fn test_remote_kinds() {
        assert!(WallpaperKind::Url.is_remote());
        assert!(WallpaperKind::VideoStream.is_remote());
        assert!(!WallpaperKind::Web.is_remote());
        assert!(!WallpaperKind::Video.is_remote());
        assert!(!WallpaperKind::Image.is_remote());
    }

    #[test]
    fn test_sparse_record_parses_with_defaults() {
        let record: RawMetadataRecord =
            serde_json::from_str(r#"{ "title": "Drifting Nebula", "kind": "video_stream" }"#)
                .expect("sparse record should parse");
        assert_eq!(record.title, "Drifting Nebula");
        assert_eq!(record.kind, WallpaperKind::VideoStream);
        assert!(record.author.is_empty());
        assert!(!record.is_absolute_path);
    }

    #[test]
    fn test_record_round_trip() {
        let record = RawMetadataRecord {
            title: "City Rain".to_string(),
            description: "Looping rain over neon streets".to_string(),
            author: "Jane".to_string(),
            contact: "example.com/janes-walls".to_string(),
            kind: WallpaperKind::Video,
            file_name: "rain.mp4".to_string(),
            preview_file_name: "preview.gif".to_string(),
            thumbnail_file_name: "thumb.jpg".to_string(),
            is_absolute_path: false,
        };
        let text = serde_json::to_string(&record).expect("record should serialize");
        let restored: RawMetadataRecord =
            serde_json::from_str(&text).expect("record should parse back");
        assert_eq!(restored, record);
    }

    #[test]
    fn test_read_metadata_record_from_folder() {
        let folder = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(
            folder.path().join(super::METADATA_FILE_NAME),
            r#"{ "title": "Waves", "kind": "gif", "file_name": "waves.gif" }"#,
        )
        .expect("record file should write");

        let record = read_metadata_record(folder.path()).expect("record should load");
        assert_eq!(record.title, "Waves");
        assert_eq!(record.kind, WallpaperKind::Gif);

        let missing = tempfile::tempdir().expect("tempdir should create");
        assert!(read_metadata_record(missing.path()).is_err());
    }

    #[test]
    fn test_lifecycle_default_is_ready() {
        assert_eq!(LifecycleTag::default(), LifecycleTag::Ready);
    }
}
