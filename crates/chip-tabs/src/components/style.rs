//! Resolution of [`ChipTabsStyles`] into the inline style strings the views
//! render. All defaults live here.

use crate::types::ChipTabsStyles;

const DEFAULT_FONT_SIZE: &str = "0.875rem";
const DEFAULT_BORDER_RADIUS: &str = "1rem";
const DEFAULT_BORDER_WIDTH: &str = "1px";
const DEFAULT_PADDING_X: &str = "1rem";
const DEFAULT_PADDING_Y: &str = "0.3rem";
const DEFAULT_GAP: &str = "0.5rem";

/// Style knobs with every default applied, plus the derived minimum height.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResolvedStyles {
    pub min_height: String,
    pub font_size: String,
    pub border_radius: String,
    pub border_width: String,
    pub padding_x: String,
    pub padding_y: String,
    pub gap: String,
    pub default_border: String,
    pub default_bg: String,
    pub default_text: String,
    pub selected_border: String,
    pub selected_bg: String,
    pub selected_text: String,
    pub selected_weight: String,
    pub hover_border: String,
    pub hover_bg: Option<String>,
    pub close_size: String,
    pub close_hover_bg: String,
    pub close_selected_hover_bg: String,
    pub custom: String,
}

impl ResolvedStyles {
    pub fn resolve(styles: &ChipTabsStyles) -> Self {
        let or = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        let font_size = or(&styles.font_size, DEFAULT_FONT_SIZE);
        let border_width = or(&styles.border_width, DEFAULT_BORDER_WIDTH);
        let padding_y = or(&styles.padding_y, DEFAULT_PADDING_Y);
        // Without an explicit height the chip height follows from its text
        // line (1.5 line-height), vertical padding and borders.
        let min_height = styles.height.clone().unwrap_or_else(|| {
            format!("calc({font_size} * 1.5 + {padding_y} * 2 + {border_width} * 2)")
        });

        Self {
            min_height,
            font_size,
            border_radius: or(&styles.border_radius, DEFAULT_BORDER_RADIUS),
            border_width,
            padding_x: or(&styles.padding_x, DEFAULT_PADDING_X),
            padding_y,
            gap: or(&styles.gap, DEFAULT_GAP),
            default_border: or(&styles.default_tab.border_color, "#d1d5db"),
            default_bg: or(&styles.default_tab.background_color, "transparent"),
            default_text: or(&styles.default_tab.text_color, "inherit"),
            selected_border: or(&styles.selected_tab.border_color, "#000000"),
            selected_bg: or(&styles.selected_tab.background_color, "#000000"),
            selected_text: or(&styles.selected_tab.text_color, "#ffffff"),
            selected_weight: or(&styles.selected_tab.font_weight, "500"),
            hover_border: or(&styles.hover_tab.border_color, "#9ca3af"),
            hover_bg: styles.hover_tab.background_color.clone(),
            close_size: or(&styles.close_button.size, "1.25rem"),
            close_hover_bg: or(&styles.close_button.hover_bg_color, "#e5e7eb"),
            close_selected_hover_bg: or(
                &styles.close_button_selected.hover_bg_color,
                "rgba(255, 255, 255, 0.2)",
            ),
            custom: styles.custom_styles.clone().unwrap_or_default(),
        }
    }

    /// Outermost wrapper: positions the arrow overlays.
    pub fn outer_style(&self) -> String {
        format!(
            "display: flex; align-items: center; flex-direction: row; position: relative; \
             overflow: hidden; min-height: {}; width: 100%;",
            self.min_height
        )
    }

    /// Scroll container: wrapping flow or a hidden-scrollbar single row.
    pub fn container_style(&self, wrap: bool) -> String {
        let mut style = format!(
            "display: flex; flex-direction: row; gap: {}; min-height: {}; outline: none;",
            self.gap, self.min_height
        );
        if wrap {
            style.push_str(" flex-wrap: wrap;");
        } else {
            style.push_str(
                " overflow-x: auto; overflow-y: hidden; scrollbar-width: none; width: 100%; \
                 min-width: 0; flex: 1 1 0px;",
            );
        }
        style
    }

    /// Inner row; reserves room under the arrow overlays when they render.
    pub fn inner_style(&self, wrap: bool, arrows: bool) -> String {
        let mut style = format!(
            "display: flex; flex-direction: row; gap: {}; min-height: {};",
            self.gap, self.min_height
        );
        if wrap {
            style.push_str(" flex-wrap: wrap;");
        } else {
            style.push_str(" flex-wrap: nowrap; min-width: max-content;");
            if arrows {
                style.push_str(" padding-left: 2.5rem; padding-right: 2.5rem;");
            }
        }
        style
    }

    /// One chip in the given interaction state. `with_close` tightens the
    /// right padding to make room for the close button.
    pub fn chip_style(&self, selected: bool, hovered: bool, with_close: bool) -> String {
        let padding_right = if with_close {
            "0.5rem"
        } else {
            self.padding_x.as_str()
        };
        let mut style = format!(
            "display: flex; align-items: center; justify-content: center; cursor: pointer; \
             border-radius: {}; border: {} solid; padding: {} {} {} {}; font-size: {}; \
             transition: all 0.2s; flex-shrink: 0; white-space: nowrap; user-select: none;",
            self.border_radius,
            self.border_width,
            self.padding_y,
            padding_right,
            self.padding_y,
            self.padding_x,
            self.font_size,
        );
        if selected {
            style.push_str(&format!(
                " border-color: {}; background-color: {}; color: {}; font-weight: {};",
                self.selected_border, self.selected_bg, self.selected_text, self.selected_weight
            ));
        } else {
            let border = if hovered {
                &self.hover_border
            } else {
                &self.default_border
            };
            let background = match (&self.hover_bg, hovered) {
                (Some(bg), true) => bg,
                _ => &self.default_bg,
            };
            style.push_str(&format!(
                " border-color: {}; background-color: {}; color: {};",
                border, background, self.default_text
            ));
        }
        if !self.custom.is_empty() {
            style.push(' ');
            style.push_str(&self.custom);
        }
        style
    }

    /// Close button; fades in as the chip is hovered.
    pub fn close_button_style(
        &self,
        selected: bool,
        close_hovered: bool,
        tab_hovered: bool,
    ) -> String {
        let background = if close_hovered {
            if selected {
                self.close_selected_hover_bg.as_str()
            } else {
                self.close_hover_bg.as_str()
            }
        } else {
            "transparent"
        };
        format!(
            "display: flex; align-items: center; justify-content: center; width: {size}; \
             height: {size}; border-radius: 9999px; cursor: pointer; padding: 1px; \
             margin-left: 0.5rem; transition: all 0.3s; opacity: {opacity}; \
             transform: {transform}; background-color: {background};",
            size = self.close_size,
            opacity = if tab_hovered { "1" } else { "0.3" },
            transform = if tab_hovered { "scale(1)" } else { "scale(0.85)" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TabStateStyles;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let resolved = ResolvedStyles::resolve(&ChipTabsStyles::default());
        assert_eq!(resolved.font_size, "0.875rem");
        assert_eq!(resolved.selected_bg, "#000000");
        assert_eq!(
            resolved.min_height,
            "calc(0.875rem * 1.5 + 0.3rem * 2 + 1px * 2)"
        );
        assert_eq!(resolved.hover_bg, None);
    }

    #[test]
    fn explicit_height_wins_over_the_derived_one() {
        let styles = ChipTabsStyles {
            height: Some("2rem".into()),
            ..Default::default()
        };
        assert_eq!(ResolvedStyles::resolve(&styles).min_height, "2rem");
    }

    #[test]
    fn chip_style_switches_on_state() {
        let styles = ChipTabsStyles {
            hover_tab: TabStateStyles {
                background_color: Some("#eee".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = ResolvedStyles::resolve(&styles);

        let selected = resolved.chip_style(true, false, false);
        assert!(selected.contains("background-color: #000000"));
        assert!(selected.contains("font-weight: 500"));

        let hovered = resolved.chip_style(false, true, false);
        assert!(hovered.contains("border-color: #9ca3af"));
        assert!(hovered.contains("background-color: #eee"));

        let idle = resolved.chip_style(false, false, true);
        assert!(idle.contains("border-color: #d1d5db"));
        // Close button present: right padding tightened.
        assert!(idle.contains("padding: 0.3rem 0.5rem 0.3rem 1rem"));
    }

    #[test]
    fn custom_styles_are_appended() {
        let styles = ChipTabsStyles {
            custom_styles: Some("text-transform: uppercase;".into()),
            ..Default::default()
        };
        let chip = ResolvedStyles::resolve(&styles).chip_style(false, false, false);
        assert!(chip.ends_with("text-transform: uppercase;"));
    }

    #[test]
    fn inner_style_reserves_room_for_arrow_overlays() {
        let resolved = ResolvedStyles::resolve(&ChipTabsStyles::default());
        assert!(resolved.inner_style(false, true).contains("padding-left: 2.5rem"));
        assert!(!resolved.inner_style(false, false).contains("padding-left"));
        assert!(resolved.inner_style(true, false).contains("flex-wrap: wrap"));
    }
}
