//! wallshelf — path resolution and validation core for a desktop wallpaper
//! library.
//!
//! Given a raw metadata record describing one wallpaper item, the folder the
//! item lives in, and a caller-supplied lifecycle tag, this crate computes a
//! normalized, validated [`LibraryItemDescriptor`]: resolved filesystem
//! paths, a representative library image, a normalized contact address, and
//! display text, staying backward compatible with the two historical on-disk
//! record layouts (absolute-path and folder-relative).
//!
//! Resolution is synchronous and touches only the local filesystem. A single
//! item resolves cheaply; callers loading a whole library batch or offload
//! the work themselves. Descriptors carry no internal locking — one writer
//! at a time, enforced by the owning collection.

pub mod address;
pub mod config;
pub mod config_persistence;
pub mod descriptor;
pub mod display;
pub mod fs_resolve;
pub mod labels;
pub mod notify;
pub mod record;
pub mod resolver;

pub use address::{normalize_address, NormalizedAddress};
pub use config::Config;
pub use descriptor::{LibraryItemDescriptor, CONTACT_SCHEME, TEXT_PLACEHOLDER};
pub use display::{select_display_image, RendererMode};
pub use labels::KindLabels;
pub use notify::{ChangeNotifier, DescriptorField, FieldChange, SubscriptionId};
pub use record::{
    read_metadata_record, LifecycleTag, RawMetadataRecord, WallpaperKind, METADATA_FILE_NAME,
};
pub use resolver::{resolve_paths, ResolveContext, ResolvedPaths, PROPERTIES_FILE_NAME};
