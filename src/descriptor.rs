//! The resolved, observable state of one wallpaper library item.

use std::path::{Path, PathBuf};

use crate::address::{normalize_address, NormalizedAddress};
use crate::display::select_display_image;
use crate::fs_resolve::validate_existing;
use crate::labels::KindLabels;
use crate::notify::{ChangeNotifier, DescriptorField, FieldChange, SubscriptionId};
use crate::record::{LifecycleTag, RawMetadataRecord};
use crate::resolver::{resolve_paths, ResolveContext};

/// Scheme forced onto record contact strings.
pub const CONTACT_SCHEME: &str = "https";

/// Placeholder shown for blank free-text fields.
pub const TEXT_PLACEHOLDER: &str = "---";

/// Resolved, validated view of one library item.
///
/// Every path field is either absent or pointed at an existing filesystem
/// entry at the moment it was assigned. Two exceptions: the file path of
/// remote kinds carries the verbatim address, and the properties path of a
/// video item may carry the bundled default substituted at construction.
///
/// Descriptors are not internally synchronized. One writer at a time,
/// enforced by the owning collection; resolved values are point-in-time
/// snapshots that may go stale if the disk changes afterwards.
pub struct LibraryItemDescriptor {
    record: RawMetadataRecord,
    base_folder: PathBuf,
    notifier: ChangeNotifier,

    title: String,
    author: String,
    description: String,
    kind_label: String,
    address: Option<NormalizedAddress>,
    file_path: Option<PathBuf>,
    preview_clip_path: Option<PathBuf>,
    thumbnail_path: Option<PathBuf>,
    properties_path: Option<PathBuf>,
    image_path: Option<PathBuf>,
    lifecycle: LifecycleTag,
    is_startup_item: bool,
}

impl LibraryItemDescriptor {
    pub fn new(
        record: RawMetadataRecord,
        base_folder: impl Into<PathBuf>,
        lifecycle: LifecycleTag,
        labels: &KindLabels,
        ctx: &ResolveContext,
    ) -> Self {
        Self::new_with_notifier(record, base_folder, lifecycle, labels, ctx, ChangeNotifier::new())
    }

    /// Builds the descriptor, emitting a change event through `notifier` for
    /// every field assigned during construction.
    pub fn new_with_notifier(
        record: RawMetadataRecord,
        base_folder: impl Into<PathBuf>,
        lifecycle: LifecycleTag,
        labels: &KindLabels,
        ctx: &ResolveContext,
        notifier: ChangeNotifier,
    ) -> Self {
        let base_folder = base_folder.into();
        let mut descriptor = Self {
            record: record.clone(),
            base_folder: base_folder.clone(),
            notifier,
            title: String::new(),
            author: String::new(),
            description: String::new(),
            kind_label: String::new(),
            address: None,
            file_path: None,
            preview_clip_path: None,
            thumbnail_path: None,
            properties_path: None,
            image_path: None,
            lifecycle: LifecycleTag::default(),
            is_startup_item: false,
        };

        descriptor.set_title(record.title.clone());
        descriptor.set_author(record.author.clone());
        descriptor.set_description(record.description.clone());
        descriptor.set_kind_label(labels.label_for(record.kind));
        descriptor.set_address(normalize_address(&record.contact, CONTACT_SCHEME));

        // Candidates are assigned directly: the resolver already validated
        // them, and the video properties fallback is intentionally exempt
        // from the existence gate.
        let resolved = resolve_paths(&record, &base_folder, ctx);
        let image_path = select_display_image(
            resolved.preview_clip_path.as_deref(),
            resolved.thumbnail_path.as_deref(),
            ctx.renderer,
        );
        descriptor.assign_path(DescriptorField::FilePath, resolved.file_path);
        descriptor.assign_path(DescriptorField::PreviewClipPath, resolved.preview_clip_path);
        descriptor.assign_path(DescriptorField::ThumbnailPath, resolved.thumbnail_path);
        descriptor.assign_path(DescriptorField::PropertiesPath, resolved.properties_path);
        descriptor.assign_path(DescriptorField::ImagePath, image_path);

        descriptor.set_lifecycle(lifecycle);
        descriptor.set_is_startup_item(false);
        descriptor
    }

    pub fn record(&self) -> &RawMetadataRecord {
        &self.record
    }

    pub fn base_folder(&self) -> &Path {
        &self.base_folder
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind_label(&self) -> &str {
        &self.kind_label
    }

    pub fn address(&self) -> Option<&NormalizedAddress> {
        self.address.as_ref()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn preview_clip_path(&self) -> Option<&Path> {
        self.preview_clip_path.as_deref()
    }

    pub fn thumbnail_path(&self) -> Option<&Path> {
        self.thumbnail_path.as_deref()
    }

    pub fn properties_path(&self) -> Option<&Path> {
        self.properties_path.as_deref()
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    pub fn lifecycle(&self) -> LifecycleTag {
        self.lifecycle
    }

    pub fn is_startup_item(&self) -> bool {
        self.is_startup_item
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&FieldChange) + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Re-validates and assigns the wallpaper file path. Remote kinds store
    /// the value verbatim; other kinds keep it only while it exists on disk.
    pub fn set_file_path(&mut self, value: Option<PathBuf>) {
        let next = if self.record.kind.is_remote() {
            value
        } else {
            value.and_then(validate_existing)
        };
        self.assign_path(DescriptorField::FilePath, next);
    }

    pub fn set_preview_clip_path(&mut self, value: Option<PathBuf>) {
        let next = value.and_then(validate_existing);
        self.assign_path(DescriptorField::PreviewClipPath, next);
    }

    pub fn set_thumbnail_path(&mut self, value: Option<PathBuf>) {
        let next = value.and_then(validate_existing);
        self.assign_path(DescriptorField::ThumbnailPath, next);
    }

    pub fn set_properties_path(&mut self, value: Option<PathBuf>) {
        let next = value.and_then(validate_existing);
        self.assign_path(DescriptorField::PropertiesPath, next);
    }

    /// The representative image mirrors the preview or thumbnail field and
    /// is never independently validated.
    pub fn set_image_path(&mut self, value: Option<PathBuf>) {
        self.assign_path(DescriptorField::ImagePath, value);
    }

    pub fn set_title(&mut self, value: String) {
        self.assign_text(DescriptorField::Title, value);
    }

    /// Blank input normalizes to the fixed placeholder.
    pub fn set_author(&mut self, value: String) {
        self.assign_text(DescriptorField::Author, normalize_text(value));
    }

    /// Blank input normalizes to the fixed placeholder.
    pub fn set_description(&mut self, value: String) {
        self.assign_text(DescriptorField::Description, normalize_text(value));
    }

    pub fn set_kind_label(&mut self, value: String) {
        self.assign_text(DescriptorField::KindLabel, value);
    }

    pub fn set_address(&mut self, value: Option<NormalizedAddress>) {
        let old = self.address.as_ref().map(NormalizedAddress::to_string);
        let new = value.as_ref().map(NormalizedAddress::to_string);
        self.address = value;
        self.notifier.emit(&FieldChange {
            field: DescriptorField::Address,
            old,
            new,
        });
    }

    /// Stored verbatim; lifecycle transitions are decided by the caller.
    pub fn set_lifecycle(&mut self, value: LifecycleTag) {
        let old = Some(format!("{:?}", self.lifecycle));
        self.lifecycle = value;
        self.notifier.emit(&FieldChange {
            field: DescriptorField::LifecycleTag,
            old,
            new: Some(format!("{:?}", value)),
        });
    }

    pub fn set_is_startup_item(&mut self, value: bool) {
        let old = Some(self.is_startup_item.to_string());
        self.is_startup_item = value;
        self.notifier.emit(&FieldChange {
            field: DescriptorField::IsStartupItem,
            old,
            new: Some(value.to_string()),
        });
    }

    fn assign_path(&mut self, field: DescriptorField, next: Option<PathBuf>) {
        let (old, new) = {
            let slot = match field {
                DescriptorField::FilePath => &mut self.file_path,
                DescriptorField::PreviewClipPath => &mut self.preview_clip_path,
                DescriptorField::ThumbnailPath => &mut self.thumbnail_path,
                DescriptorField::PropertiesPath => &mut self.properties_path,
                DescriptorField::ImagePath => &mut self.image_path,
                _ => return,
            };
            let old = slot.as_ref().map(|path| path.display().to_string());
            let new = next.as_ref().map(|path| path.display().to_string());
            *slot = next;
            (old, new)
        };
        self.notifier.emit(&FieldChange { field, old, new });
    }

    fn assign_text(&mut self, field: DescriptorField, next: String) {
        let (old, new) = {
            let slot = match field {
                DescriptorField::Title => &mut self.title,
                DescriptorField::Author => &mut self.author,
                DescriptorField::Description => &mut self.description,
                DescriptorField::KindLabel => &mut self.kind_label,
                _ => return,
            };
            let old = if slot.is_empty() {
                None
            } else {
                Some(slot.clone())
            };
            let new = Some(next.clone());
            *slot = next;
            (old, new)
        };
        self.notifier.emit(&FieldChange { field, old, new });
    }
}

fn normalize_text(value: String) -> String {
    if value.trim().is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        value
    }
}
