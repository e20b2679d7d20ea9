// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` entity, its `Variant`, and the
//! `ToastOptions` payload used both to create toasts and to patch them.

use super::id::ToastId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Visual intent of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Neutral message.
    #[default]
    Default,
    /// Failure or irreversible action.
    Destructive,
    /// Operation completed successfully.
    Success,
    /// Something the user should know about, without blocking.
    Warning,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 4] = [
        Variant::Default,
        Variant::Destructive,
        Variant::Success,
        Variant::Warning,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Destructive => "destructive",
            Variant::Success => "success",
            Variant::Warning => "warning",
        }
    }
}

/// Optional call-to-action attached to a toast.
///
/// The store never interprets it. The renderer shows `label` and reports
/// `key` back to the caller when the action is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastAction {
    pub label: String,
    pub key: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

/// A notification held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    action: Option<ToastAction>,
    variant: Variant,
    open: bool,
}

impl Toast {
    /// Builds an open toast from creation options.
    pub(crate) fn open_with(id: ToastId, options: ToastOptions) -> Self {
        Self {
            id,
            title: options.title,
            description: options.description,
            action: options.action,
            variant: options.variant.unwrap_or_default(),
            open: true,
        }
    }

    /// Merges the fields set in `patch`. `id` and `open` are never touched.
    pub(crate) fn merge(&mut self, patch: &ToastOptions) {
        if let Some(title) = &patch.title {
            self.title = Some(title.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(action) = &patch.action {
            self.action = Some(action.clone());
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns whether the toast is still visible.
    ///
    /// `false` means dismissal was requested and removal is pending.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Payload for creating a toast, or patching one with [`Action::Update`].
///
/// Unset fields are left alone when patching.
///
/// [`Action::Update`]: super::Action::Update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub action: Option<ToastAction>,
    pub variant: Option<Variant>,
    /// Lifetime override. Only read when the toast is created.
    pub duration: Option<Duration>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for a success toast with the given title.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new().title(title).variant(Variant::Success)
    }

    /// Creates options for a warning toast with the given title.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new().title(title).variant(Variant::Warning)
    }

    /// Creates options for a destructive toast with the given title.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self::new().title(title).variant(Variant::Destructive)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets a custom lifetime, overriding the store default.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}
