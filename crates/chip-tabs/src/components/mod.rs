pub mod chip_tabs;
pub mod scroll_arrow;

mod chip_tab;
mod style;
