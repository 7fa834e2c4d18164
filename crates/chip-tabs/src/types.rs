//! Core data model for the tab strip: tab descriptors, event payloads,
//! style knobs, and the close-confirmation outcome.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// A single chip tab descriptor.
///
/// Identity is carried by `key` (unique, stable); `label` and `icon` are
/// display-only and may change without affecting identity. Serialized field
/// names are camelCase so a persisted snapshot written by the JS version of
/// the component round-trips.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub key: String,
    pub label: String,
    /// Name of a built-in icon (see [`crate::icons::icon`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Suppresses the close button on this tab even when the strip shows
    /// close buttons.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hide_close_button: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Tab {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            hide_close_button: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn without_close_button(mut self) -> Self {
        self.hide_close_button = true;
        self
    }
}

/// Horizontal direction, shared by keyboard navigation and the scroll arrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Payload of the `on_change` callback. Indices are computed against the
/// externally supplied tab collection; `-1` when the key is not found there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub selected_index: i32,
    pub previous_index: i32,
}

/// Payload of the `on_reorder` callback, carrying pre-move indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReorderEvent {
    pub from_index: usize,
    pub to_index: usize,
}

/// Result of an `on_close` confirmation callback.
///
/// The tab is removed only when the outcome resolves to "remove"; while a
/// deferred outcome is pending the tab stays in place.
pub enum CloseOutcome {
    /// Keep the tab.
    Keep,
    /// Remove the tab.
    Remove,
    /// Decide asynchronously; `true` removes the tab.
    Deferred(Pin<Box<dyn Future<Output = bool>>>),
}

impl From<bool> for CloseOutcome {
    fn from(remove: bool) -> Self {
        if remove {
            CloseOutcome::Remove
        } else {
            CloseOutcome::Keep
        }
    }
}

impl CloseOutcome {
    pub fn deferred(fut: impl Future<Output = bool> + 'static) -> Self {
        CloseOutcome::Deferred(Box::pin(fut))
    }

    pub(crate) async fn resolve(self) -> bool {
        match self {
            CloseOutcome::Keep => false,
            CloseOutcome::Remove => true,
            CloseOutcome::Deferred(fut) => fut.await,
        }
    }
}

/// Colors and weight for one visual state of a chip.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabStateStyles {
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub font_weight: Option<String>,
}

/// Close-button sizing and hover color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloseButtonStyles {
    pub size: Option<String>,
    pub hover_bg_color: Option<String>,
}

/// Visual customization of the strip. Every field is optional; unset fields
/// fall back to the built-in defaults (see `components::style`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChipTabsStyles {
    /// Explicit chip height; when unset the height is derived from font size,
    /// vertical padding and border width.
    pub height: Option<String>,
    pub font_size: Option<String>,
    pub border_radius: Option<String>,
    pub border_width: Option<String>,
    pub padding_x: Option<String>,
    pub padding_y: Option<String>,
    /// Gap between chips.
    pub gap: Option<String>,
    pub default_tab: TabStateStyles,
    pub selected_tab: TabStateStyles,
    pub hover_tab: TabStateStyles,
    pub close_button: CloseButtonStyles,
    pub close_button_selected: CloseButtonStyles,
    /// Extra CSS declarations appended verbatim to every chip.
    pub custom_styles: Option<String>,
}
