//! Per-field change notification for data-binding consumers.
//!
//! The descriptor owns a [`ChangeNotifier`] by composition and emits one
//! event per setter invocation, including the assignments made while the
//! descriptor is being constructed (callers pass a pre-wired notifier in to
//! observe those).

use std::fmt;

/// Descriptor field a change event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorField {
    FilePath,
    PreviewClipPath,
    ThumbnailPath,
    PropertiesPath,
    ImagePath,
    Address,
    KindLabel,
    Title,
    Author,
    Description,
    LifecycleTag,
    IsStartupItem,
}

impl DescriptorField {
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptorField::FilePath => "file_path",
            DescriptorField::PreviewClipPath => "preview_clip_path",
            DescriptorField::ThumbnailPath => "thumbnail_path",
            DescriptorField::PropertiesPath => "properties_path",
            DescriptorField::ImagePath => "image_path",
            DescriptorField::Address => "address",
            DescriptorField::KindLabel => "kind_label",
            DescriptorField::Title => "title",
            DescriptorField::Author => "author",
            DescriptorField::Description => "description",
            DescriptorField::LifecycleTag => "lifecycle_tag",
            DescriptorField::IsStartupItem => "is_startup_item",
        }
    }
}

/// One field mutation, with display-formatted old and new values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: DescriptorField,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type ChangeCallback = Box<dyn FnMut(&FieldChange)>;

/// Synchronous observer registry. Callbacks run on the mutating thread, in
/// subscription order, before the setter returns.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, ChangeCallback)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&FieldChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns true when the subscription was present and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn emit(&mut self, change: &FieldChange) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(change);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
