//! Chip-style tab strip for Leptos.
//!
//! A horizontal set of pill-shaped selectable tabs with wrapping or scrolling
//! layout, optional close buttons, drag-to-reorder, keyboard navigation, and
//! optional persistence of the tab set and selection to browser cookies.
//!
//! # Examples
//!
//! ```rust,ignore
//! use chip_tabs::{ChipTabs, Tab};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Demo() -> impl IntoView {
//!     let tabs = RwSignal::new(vec![
//!         Tab::new("hot", "Hot").with_icon("flame"),
//!         Tab::new("new", "New"),
//!         Tab::new("pinned", "Pinned").without_close_button(),
//!     ]);
//!
//!     view! {
//!         <ChipTabs
//!             tabs=tabs
//!             default_selected="hot"
//!             wrap=false
//!             show_close_button=true
//!             tabs_cookie_name="demo-tabs"
//!             selected_cookie_name="demo-selected"
//!         />
//!     }
//! }
//! ```

pub mod components;
pub mod cookies;
pub mod drag_scroll;
pub mod icons;
pub mod scroll;
pub mod store;
pub mod types;

pub use components::chip_tabs::ChipTabs;
pub use components::scroll_arrow::ScrollArrow;
pub use types::{
    ChangeEvent, ChipTabsStyles, CloseButtonStyles, CloseOutcome, Direction, ReorderEvent, Tab,
    TabStateStyles,
};
