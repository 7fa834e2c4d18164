//! Tab set store rules: how the internal (tabs, selection) state is seeded
//! from props and persisted snapshots, and the pure list operations behind
//! selection, close, and reorder.

use std::collections::HashSet;

use crate::types::{ChangeEvent, Direction, ReorderEvent, Tab};

/// Which source a state field was initialized from. Decided once at mount;
/// a `Persisted` field ignores prop changes for the component lifetime while
/// a `Props` field keeps mirroring its prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOrigin {
    Props,
    Persisted,
}

impl FieldOrigin {
    pub fn tracks_props(self) -> bool {
        matches!(self, FieldOrigin::Props)
    }
}

/// Resolved initial state of the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialState {
    pub tabs: Vec<Tab>,
    pub selected: String,
    pub tabs_origin: FieldOrigin,
    pub selected_origin: FieldOrigin,
}

/// Seeds the store: each field independently takes its persisted snapshot
/// when one was loaded, otherwise the prop value.
pub fn initial_state(
    props_tabs: Vec<Tab>,
    props_selected: String,
    persisted_tabs: Option<Vec<Tab>>,
    persisted_selected: Option<String>,
) -> InitialState {
    let (tabs, tabs_origin) = match persisted_tabs {
        Some(tabs) => (tabs, FieldOrigin::Persisted),
        None => (props_tabs, FieldOrigin::Props),
    };
    let (selected, selected_origin) = match persisted_selected {
        Some(key) => (key, FieldOrigin::Persisted),
        None => (props_selected, FieldOrigin::Props),
    };
    InitialState {
        tabs,
        selected,
        tabs_origin,
        selected_origin,
    }
}

pub fn index_of(tabs: &[Tab], key: &str) -> Option<usize> {
    tabs.iter().position(|tab| tab.key == key)
}

/// Builds the `on_change` payload. Indices refer to `tabs` (the externally
/// supplied collection); a key not present there yields `-1`.
pub fn change_event(tabs: &[Tab], previous_key: &str, new_key: &str) -> ChangeEvent {
    let index = |key: &str| index_of(tabs, key).map_or(-1, |i| i as i32);
    ChangeEvent {
        selected_index: index(new_key),
        previous_index: index(previous_key),
    }
}

/// Key of the neighbor of `current` in display order, or `None` at either
/// end (and when `current` is not in the collection).
pub fn adjacent_key<'a>(tabs: &'a [Tab], current: &str, direction: Direction) -> Option<&'a str> {
    let index = index_of(tabs, current)?;
    let next = match direction {
        Direction::Left => index.checked_sub(1)?,
        Direction::Right => {
            let next = index + 1;
            if next >= tabs.len() {
                return None;
            }
            next
        }
    };
    Some(tabs[next].key.as_str())
}

/// Removes the element at `from` and reinserts it at `to`, preserving the
/// relative order of everything else.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// Computes the reordered list for a completed drag. `None` when source and
/// target are the same tab or either key is unknown; the event carries
/// pre-move indices.
pub fn plan_reorder(
    tabs: &[Tab],
    source_key: &str,
    target_key: &str,
) -> Option<(Vec<Tab>, ReorderEvent)> {
    if source_key == target_key {
        return None;
    }
    let from = index_of(tabs, source_key)?;
    let to = index_of(tabs, target_key)?;
    let mut reordered = tabs.to_vec();
    array_move(&mut reordered, from, to);
    Some((
        reordered,
        ReorderEvent {
            from_index: from,
            to_index: to,
        },
    ))
}

/// After closing the selected tab, selection moves to the first remaining
/// tab in display order (`None` when the strip is now empty).
pub fn selection_after_close(remaining: &[Tab]) -> Option<&str> {
    remaining.first().map(|tab| tab.key.as_str())
}

/// Result of a confirmed close: the list without the closed tab, and the new
/// selection when the closed tab was the selected one.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosePlan {
    pub remaining: Vec<Tab>,
    pub next_selected: Option<String>,
}

/// Applies a confirmed close. `None` when `key` is no longer in the list
/// (it may have been replaced while the confirmation was pending).
pub fn plan_close(tabs: &[Tab], key: &str, selected: &str) -> Option<ClosePlan> {
    let index = index_of(tabs, key)?;
    let mut remaining = tabs.to_vec();
    remaining.remove(index);
    let next_selected = (selected == key)
        .then(|| selection_after_close(&remaining).map(str::to_string))
        .flatten();
    Some(ClosePlan {
        remaining,
        next_selected,
    })
}

/// Keys with a close confirmation in flight. At most one confirmation per
/// key; a repeated request is dropped until the pending one resolves.
#[derive(Clone, Debug, Default)]
pub struct PendingCloses(HashSet<String>);

impl PendingCloses {
    /// Registers a confirmation for `key`. `false` when one is already
    /// pending, in which case the request must be dropped.
    pub fn begin(&mut self, key: &str) -> bool {
        self.0.insert(key.to_string())
    }

    /// The confirmation for `key` resolved, one way or the other.
    pub fn finish(&mut self, key: &str) {
        self.0.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter().map(|k| Tab::new(*k, k.to_uppercase())).collect()
    }

    #[test]
    fn persisted_snapshot_wins_per_field() {
        let state = initial_state(
            tabs(&["a", "b"]),
            "a".into(),
            Some(tabs(&["x", "y"])),
            None,
        );
        assert_eq!(state.tabs, tabs(&["x", "y"]));
        assert_eq!(state.tabs_origin, FieldOrigin::Persisted);
        assert_eq!(state.selected, "a");
        assert_eq!(state.selected_origin, FieldOrigin::Props);
        assert!(state.selected_origin.tracks_props());
        assert!(!state.tabs_origin.tracks_props());
    }

    #[test]
    fn props_used_when_nothing_persisted() {
        let state = initial_state(tabs(&["a"]), "a".into(), None, None);
        assert_eq!(state.tabs, tabs(&["a"]));
        assert_eq!(state.tabs_origin, FieldOrigin::Props);
        assert_eq!(state.selected_origin, FieldOrigin::Props);
    }

    #[test]
    fn change_event_indices_against_supplied_collection() {
        let list = tabs(&["a", "b", "c"]);
        let event = change_event(&list, "a", "c");
        assert_eq!(event.previous_index, 0);
        assert_eq!(event.selected_index, 2);
    }

    #[test]
    fn change_event_missing_key_is_minus_one() {
        let list = tabs(&["a", "b"]);
        let event = change_event(&list, "ghost", "b");
        assert_eq!(event.previous_index, -1);
        assert_eq!(event.selected_index, 1);
    }

    #[test]
    fn adjacent_key_moves_one_step_in_display_order() {
        let list = tabs(&["a", "b", "c"]);
        assert_eq!(adjacent_key(&list, "b", Direction::Left), Some("a"));
        assert_eq!(adjacent_key(&list, "b", Direction::Right), Some("c"));
    }

    #[test]
    fn adjacent_key_is_none_at_either_end() {
        let list = tabs(&["a", "b", "c"]);
        assert_eq!(adjacent_key(&list, "a", Direction::Left), None);
        assert_eq!(adjacent_key(&list, "c", Direction::Right), None);
        assert_eq!(adjacent_key(&list, "ghost", Direction::Right), None);
    }

    #[test]
    fn array_move_preserves_relative_order() {
        let mut items = vec!["a", "b", "c", "d"];
        array_move(&mut items, 2, 0);
        assert_eq!(items, vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn plan_reorder_emits_pre_move_indices() {
        let list = tabs(&["a", "b", "c", "d"]);
        let (reordered, event) = plan_reorder(&list, "c", "a").unwrap();
        let keys: Vec<&str> = reordered.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "a", "b", "d"]);
        assert_eq!(event.from_index, 2);
        assert_eq!(event.to_index, 0);
    }

    #[test]
    fn plan_reorder_same_tab_is_a_no_op() {
        let list = tabs(&["a", "b"]);
        assert!(plan_reorder(&list, "a", "a").is_none());
        assert!(plan_reorder(&list, "a", "ghost").is_none());
    }

    #[test]
    fn selection_moves_to_first_remaining_tab() {
        let list = tabs(&["b", "c"]);
        assert_eq!(selection_after_close(&list), Some("b"));
        assert_eq!(selection_after_close(&[]), None);
    }

    #[test]
    fn closing_the_selected_tab_hands_selection_to_the_new_first() {
        let list = tabs(&["a", "b", "c"]);
        let plan = plan_close(&list, "a", "a").unwrap();
        assert_eq!(plan.remaining, tabs(&["b", "c"]));
        assert_eq!(plan.next_selected, Some("b".to_string()));
    }

    #[test]
    fn closing_an_unselected_tab_keeps_the_selection() {
        let list = tabs(&["a", "b", "c"]);
        let plan = plan_close(&list, "b", "a").unwrap();
        assert_eq!(plan.remaining, tabs(&["a", "c"]));
        assert_eq!(plan.next_selected, None);
    }

    #[test]
    fn closing_the_last_tab_leaves_no_selection_target() {
        let list = tabs(&["a"]);
        let plan = plan_close(&list, "a", "a").unwrap();
        assert!(plan.remaining.is_empty());
        assert_eq!(plan.next_selected, None);
    }

    #[test]
    fn close_of_a_vanished_key_is_a_no_op() {
        let list = tabs(&["a", "b"]);
        assert!(plan_close(&list, "ghost", "a").is_none());
    }

    #[test]
    fn repeated_close_request_on_a_pending_key_is_dropped() {
        let mut pending = PendingCloses::default();
        assert!(pending.begin("a"));
        assert!(!pending.begin("a"));
        // Other keys are unaffected.
        assert!(pending.begin("b"));
        pending.finish("a");
        assert!(pending.begin("a"));
    }

    #[test]
    fn list_replaced_while_a_close_is_pending_makes_the_removal_a_no_op() {
        let mut pending = PendingCloses::default();
        assert!(pending.begin("b"));
        // The collection is swapped out while the confirmation is in flight.
        let replaced = tabs(&["x", "y"]);
        pending.finish("b");
        assert!(plan_close(&replaced, "b", "x").is_none());
    }
}
