//! Pointer-drag scrolling for the non-wrapping layout.
//!
//! A press arms the gesture; movement beyond [`DRAG_THRESHOLD`] turns it into
//! a drag that pans the strip. A completed drag latches a click suppression:
//! the click the browser fires on release must be swallowed, and
//! [`DragScroll::take_click_suppression`] consumes the latch. Only wired when
//! reordering is disabled; the two gestures are mutually exclusive.

/// Pixel distance that disambiguates a drag from a click.
pub const DRAG_THRESHOLD: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct DragScroll {
    pressed: bool,
    dragging: bool,
    suppress_click: bool,
    start_x: f64,
    start_scroll: f64,
}

impl DragScroll {
    /// Arms the gesture at pointer position `x` with the current offset.
    pub fn press(&mut self, x: f64, scroll_left: f64) {
        self.pressed = true;
        self.dragging = false;
        // A suppression the previous drag left behind never found its click
        // (the release can land outside any chip); a new press discards it.
        self.suppress_click = false;
        self.start_x = x;
        self.start_scroll = scroll_left;
    }

    /// New scroll offset for a pointer move, once the threshold is exceeded.
    /// `None` while the gesture is below the threshold or not armed.
    pub fn move_to(&mut self, x: f64) -> Option<f64> {
        if !self.pressed {
            return None;
        }
        let delta = x - self.start_x;
        if !self.dragging && delta.abs() < DRAG_THRESHOLD {
            return None;
        }
        self.dragging = true;
        Some(self.start_scroll - delta)
    }

    /// Ends the gesture. `true` when it was a drag, in which case a click
    /// suppression is latched.
    pub fn release(&mut self) -> bool {
        let was_drag = self.dragging;
        self.pressed = false;
        self.dragging = false;
        self.suppress_click = was_drag;
        was_drag
    }

    /// Consumes the latched click suppression.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }

    /// Aborts the gesture without reporting; used when the pointer leaves
    /// the strip, where no click follows.
    pub fn cancel(&mut self) {
        self.pressed = false;
        self.dragging = false;
        self.suppress_click = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_movement_stays_a_click() {
        let mut drag = DragScroll::default();
        drag.press(100.0, 0.0);
        assert_eq!(drag.move_to(103.0), None);
        assert!(!drag.is_dragging());
        assert!(!drag.release());
    }

    #[test]
    fn movement_past_threshold_pans_and_suppresses_the_click() {
        let mut drag = DragScroll::default();
        drag.press(100.0, 50.0);
        assert_eq!(drag.move_to(110.0), Some(40.0));
        // Once dragging, even sub-threshold moves keep panning.
        assert_eq!(drag.move_to(102.0), Some(48.0));
        assert!(drag.release());
        assert!(drag.take_click_suppression());
        // Consumed: the click after the next one goes through.
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn stale_suppression_is_discarded_by_the_next_press() {
        // A drag whose release lands off the origin chip produces no chip
        // click, so its suppression is never consumed. It must not swallow
        // the next genuine click.
        let mut drag = DragScroll::default();
        drag.press(100.0, 0.0);
        drag.move_to(150.0);
        assert!(drag.release());

        drag.press(200.0, 50.0);
        assert!(!drag.release());
        assert!(!drag.take_click_suppression());
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut drag = DragScroll::default();
        assert_eq!(drag.move_to(500.0), None);
    }

    #[test]
    fn cancel_discards_the_gesture() {
        let mut drag = DragScroll::default();
        drag.press(100.0, 0.0);
        drag.move_to(200.0);
        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(!drag.take_click_suppression());
        assert_eq!(drag.move_to(300.0), None);
    }

    #[test]
    fn leftward_drag_scrolls_forward() {
        let mut drag = DragScroll::default();
        drag.press(200.0, 0.0);
        assert_eq!(drag.move_to(150.0), Some(50.0));
    }
}
