//! Scroll coordination for the non-wrapping layout.
//!
//! All geometry here is pure: tab rectangles come in content coordinates and
//! the viewport as (scroll offset, client width, content width), so the
//! snapping policy is testable without a rendering surface. The DOM binding
//! that produces these values lives in `components::chip_tabs`.

use crate::types::Direction;

/// Margin kept between a tab brought into view and the viewport edge.
pub const EDGE_MARGIN: f64 = 8.0;

/// Sub-pixel slack for edge comparisons; browsers report fractional rects.
const EDGE_TOLERANCE: f64 = 1.0;

/// Horizontal extent of one tab element, in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabRect {
    pub left: f64,
    pub right: f64,
}

impl TabRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Scroll state of the strip's viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

impl Viewport {
    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Content coordinate of the viewport's right edge.
    pub fn right_edge(&self) -> f64 {
        self.scroll_left + self.client_width
    }
}

/// Whether the content is wider than the viewport at all. Gates rendering of
/// the arrow overlays.
pub fn overflows(viewport: Viewport) -> bool {
    viewport.scroll_width > viewport.client_width + EDGE_TOLERANCE
}

/// (can scroll left, can scroll right) for the current offset.
pub fn arrow_visibility(viewport: Viewport) -> (bool, bool) {
    let left = viewport.scroll_left > EDGE_TOLERANCE;
    let right = viewport.right_edge() < viewport.scroll_width - EDGE_TOLERANCE;
    (left, right)
}

/// Target offset for one arrow click, snapping to tab boundaries so no tab is
/// revealed partially.
///
/// Rightward: the first tab fully visible at the left edge is located and the
/// viewport scrolls so the tab after it lands on the left edge; with no such
/// pair the viewport goes to the trailing edge. Leftward: the last tab that
/// starts before the current left edge is aligned to the edge; with none the
/// viewport goes to the start.
///
/// Returns `None` when the strip is already at the computed position.
pub fn step_target(rects: &[TabRect], viewport: Viewport, direction: Direction) -> Option<f64> {
    let target = match direction {
        Direction::Right => {
            let first_fully_visible = rects
                .iter()
                .position(|rect| rect.left >= viewport.scroll_left - EDGE_TOLERANCE);
            match first_fully_visible.and_then(|i| rects.get(i + 1)) {
                Some(next) => next.left,
                None => viewport.max_offset(),
            }
        }
        Direction::Left => rects
            .iter()
            .rev()
            .find(|rect| rect.left < viewport.scroll_left - EDGE_TOLERANCE)
            .map_or(0.0, |rect| rect.left),
    };
    let target = target.clamp(0.0, viewport.max_offset());
    if (target - viewport.scroll_left).abs() <= EDGE_TOLERANCE {
        None
    } else {
        Some(target)
    }
}

/// Target offset that makes `rect` fully visible, keeping `margin` between it
/// and the occluding edge. `None` when the tab is already fully visible.
pub fn into_view_target(rect: TabRect, viewport: Viewport, margin: f64) -> Option<f64> {
    if rect.left < viewport.scroll_left + margin {
        Some((rect.left - margin).max(0.0))
    } else if rect.right > viewport.right_edge() - margin {
        Some((rect.right + margin - viewport.client_width).min(viewport.max_offset()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three tabs with a 10px gap: A [0,100], B [110,210], C [220,320].
    fn three_tabs() -> Vec<TabRect> {
        vec![
            TabRect { left: 0.0, right: 100.0 },
            TabRect { left: 110.0, right: 210.0 },
            TabRect { left: 220.0, right: 320.0 },
        ]
    }

    fn viewport(scroll_left: f64) -> Viewport {
        Viewport {
            scroll_left,
            client_width: 160.0,
            scroll_width: 320.0,
        }
    }

    #[test]
    fn arrows_for_viewport_fitting_a_and_half_of_b() {
        // A visible, B cut in half: only the right arrow is active.
        let (left, right) = arrow_visibility(viewport(0.0));
        assert!(!left);
        assert!(right);
        assert!(overflows(viewport(0.0)));
    }

    #[test]
    fn no_arrows_without_overflow() {
        let vp = Viewport {
            scroll_left: 0.0,
            client_width: 400.0,
            scroll_width: 320.0,
        };
        assert!(!overflows(vp));
        assert_eq!(arrow_visibility(vp), (false, false));
    }

    #[test]
    fn left_arrow_appears_once_scrolled() {
        let (left, right) = arrow_visibility(viewport(50.0));
        assert!(left);
        assert!(right);
        let (left, right) = arrow_visibility(viewport(160.0));
        assert!(left);
        assert!(!right);
    }

    #[test]
    fn step_right_aligns_next_tab_to_left_edge() {
        // From the start, A is the first fully visible tab, so the viewport
        // snaps to B's leading edge.
        let target = step_target(&three_tabs(), viewport(0.0), Direction::Right);
        assert_eq!(target, Some(110.0));
    }

    #[test]
    fn step_right_past_last_tab_goes_to_trailing_edge() {
        let target = step_target(&three_tabs(), viewport(110.0), Direction::Right);
        // B fully visible at the edge, next is C at 220, clamped to max offset.
        assert_eq!(target, Some(160.0));
        // From C's position there is no next tab: trailing edge, already there.
        assert_eq!(
            step_target(&three_tabs(), viewport(160.0), Direction::Right),
            None
        );
    }

    #[test]
    fn step_left_aligns_previous_tab_to_left_edge() {
        let target = step_target(&three_tabs(), viewport(160.0), Direction::Left);
        // B starts at 110, before the 160 edge.
        assert_eq!(target, Some(110.0));
    }

    #[test]
    fn step_left_with_no_earlier_tab_goes_to_start() {
        assert_eq!(
            step_target(&three_tabs(), viewport(0.5), Direction::Left),
            None
        );
        let target = step_target(&three_tabs(), viewport(50.0), Direction::Left);
        assert_eq!(target, Some(0.0));
    }

    #[test]
    fn into_view_scrolls_by_the_occlusion_amount() {
        let rect = TabRect { left: 220.0, right: 320.0 };
        // Right edge occluded: 320 + 8 - 160 = 168, clamped to max offset 160.
        assert_eq!(into_view_target(rect, viewport(100.0), EDGE_MARGIN), Some(160.0));
        // Left edge occluded.
        let rect = TabRect { left: 110.0, right: 210.0 };
        assert_eq!(into_view_target(rect, viewport(160.0), EDGE_MARGIN), Some(102.0));
    }

    #[test]
    fn into_view_is_a_no_op_when_fully_visible() {
        let rect = TabRect { left: 110.0, right: 210.0 };
        assert_eq!(into_view_target(rect, viewport(70.0), EDGE_MARGIN), None);
    }
}
