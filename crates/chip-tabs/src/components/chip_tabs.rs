//! The tab strip component.
//!
//! Control flow: props / persisted cookies seed the internal state once at
//! mount; user interaction (click, arrow keys, close, drag) mutates it; every
//! committed change is written back to the configured cookies and reported
//! through the callbacks.

use std::cell::Cell;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::cookies;
use crate::drag_scroll::DragScroll;
use crate::scroll::{self, TabRect, Viewport, EDGE_MARGIN};
use crate::store;
use crate::types::{
    ChangeEvent, ChipTabsStyles, CloseOutcome, Direction, ReorderEvent, Tab,
};

use super::chip_tab::ChipTab;
use super::scroll_arrow::ScrollArrow;
use super::style::ResolvedStyles;

thread_local! {
    // Distinguishes scroll containers of multiple strips on one page.
    static NEXT_INSTANCE_ID: Cell<u64> = const { Cell::new(0) };
}

fn next_instance_id() -> u64 {
    NEXT_INSTANCE_ID.with(|cell| {
        let id = cell.get();
        cell.set(id + 1);
        id
    })
}

/// Chip-style tab strip with wrapping or scrolling layout, optional close
/// buttons, drag-to-reorder, keyboard navigation, and cookie persistence.
///
/// # Examples
///
/// ```rust,ignore
/// <ChipTabs
///     tabs=tabs
///     default_selected="hot"
///     wrap=false
///     show_close_button=true
///     tabs_cookie_name="my-tabs"
///     on_change=Callback::new(move |ev: ChangeEvent| log::debug!("{ev:?}"))
///     on_close=Callback::new(move |_key: String| CloseOutcome::Remove)
/// />
/// ```
#[component]
pub fn ChipTabs(
    /// Ordered tab descriptors; render order is logical order and keys must
    /// be unique.
    #[prop(into)]
    tabs: Signal<Vec<Tab>>,
    /// Controlled selection key.
    #[prop(optional, into)]
    selected_key: MaybeProp<String>,
    /// Initial selection when `selected_key` is not given.
    #[prop(optional, into)]
    default_selected: MaybeProp<String>,
    /// Additional CSS classes on the scroll container.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Wrapping flow layout; `false` turns the strip into a single
    /// horizontally scrollable row.
    #[prop(default = true)]
    wrap: bool,
    /// Scroll arrow overlays (non-wrapping layout only).
    #[prop(default = true)]
    show_arrows: bool,
    /// Close buttons on chips; per-tab `hide_close_button` overrides.
    #[prop(default = false)]
    show_close_button: bool,
    /// Drag-to-reorder. Mutually exclusive with pointer-drag scrolling.
    #[prop(default = false)]
    draggable: bool,
    /// Left/right arrow keys move the selection while the strip has focus.
    #[prop(default = true)]
    keyboard_navigation: bool,
    /// Cookie persisting the selected key.
    #[prop(optional, into)]
    selected_cookie_name: Option<String>,
    /// Cookie persisting the tab list.
    #[prop(optional, into)]
    tabs_cookie_name: Option<String>,
    /// Visual customization.
    #[prop(optional)]
    styles: ChipTabsStyles,
    /// Selection changed; indices refer to the `tabs` prop, `-1` = not found.
    #[prop(optional)]
    on_change: Option<Callback<ChangeEvent>>,
    /// Close confirmation; the tab is removed only when the outcome resolves
    /// to remove.
    #[prop(optional)]
    on_close: Option<Callback<String, CloseOutcome>>,
    /// A drag reordered the tabs; indices are pre-move.
    #[prop(optional)]
    on_reorder: Option<Callback<ReorderEvent>>,
    /// Fired once after the persisted snapshot was resolved at mount.
    #[prop(optional)]
    on_loaded: Option<Callback<(Vec<Tab>, String)>>,
) -> impl IntoView {
    // --- Tab set store -----------------------------------------------------
    // Each field is seeded from its cookie when configured and present, else
    // from props. The losing source for a field stays ignored: a persisted
    // field never tracks later prop changes.
    let persisted_tabs = tabs_cookie_name.as_deref().and_then(cookies::load_tabs);
    let persisted_selected = selected_cookie_name
        .as_deref()
        .and_then(cookies::load_selected);

    let initial = store::initial_state(
        tabs.get_untracked(),
        selected_key
            .get_untracked()
            .or_else(|| default_selected.get_untracked())
            .unwrap_or_default(),
        persisted_tabs,
        persisted_selected,
    );

    let tab_list = RwSignal::new(initial.tabs.clone());
    let selected = RwSignal::new(initial.selected.clone());

    if let Some(callback) = on_loaded {
        let loaded_tabs = initial.tabs.clone();
        let loaded_selected = initial.selected.clone();
        Effect::new(move |prev: Option<()>| {
            if prev.is_none() {
                callback.run((loaded_tabs.clone(), loaded_selected.clone()));
            }
        });
    }

    if initial.tabs_origin.tracks_props() {
        Effect::new(move |prev: Option<()>| {
            let next = tabs.get();
            if prev.is_some() {
                tab_list.set(next);
            }
        });
    }
    if initial.selected_origin.tracks_props() {
        let selected_key_prop = selected_key.clone();
        Effect::new(move |prev: Option<()>| {
            let next = selected_key_prop.get();
            if let (Some(key), Some(())) = (next, prev) {
                selected.set(key);
            }
        });
        let selected_key_prop = selected_key.clone();
        Effect::new(move |prev: Option<()>| {
            let next = default_selected.get();
            if let (Some(key), Some(())) = (next, prev) {
                if selected_key_prop.get_untracked().is_none() {
                    selected.set(key);
                }
            }
        });
    }

    // --- Persistence -------------------------------------------------------
    // Every committed change overwrites the corresponding cookie.
    if let Some(name) = tabs_cookie_name {
        Effect::new(move |_| {
            cookies::save_tabs(&name, &tab_list.get());
        });
    }
    if let Some(name) = selected_cookie_name {
        Effect::new(move |_| {
            cookies::save_selected(&name, &selected.get());
        });
    }

    // --- Scroll coordination ----------------------------------------------
    let container_id = format!("chip-tabs-scroll-{}", next_instance_id());
    let (show_left_arrow, set_show_left_arrow) = signal(false);
    let (show_right_arrow, set_show_right_arrow) = signal(false);
    let (has_overflow, set_has_overflow) = signal(false);

    let update_arrows = {
        let container_id = container_id.clone();
        move || {
            let Some(container) = find_container(&container_id) else {
                return;
            };
            let viewport = measure_viewport(&container);
            set_has_overflow.set(scroll::overflows(viewport));
            let (left, right) = scroll::arrow_visibility(viewport);
            set_show_left_arrow.set(left);
            set_show_right_arrow.set(right);
        }
    };

    let scroll_step = {
        let container_id = container_id.clone();
        move |direction: Direction| {
            let Some(container) = find_container(&container_id) else {
                return;
            };
            let rects: Vec<TabRect> = measure_tab_rects(&container)
                .into_iter()
                .map(|(_, rect)| rect)
                .collect();
            let viewport = measure_viewport(&container);
            if let Some(target) = scroll::step_target(&rects, viewport, direction) {
                container.set_scroll_left(target.round() as i32);
            }
        }
    };

    let scroll_into_view = {
        let container_id = container_id.clone();
        move |key: &str| {
            let Some(container) = find_container(&container_id) else {
                return;
            };
            let rect = measure_tab_rects(&container)
                .into_iter()
                .find_map(|(k, rect)| (k == key).then_some(rect));
            let Some(rect) = rect else { return };
            let viewport = measure_viewport(&container);
            if let Some(target) = scroll::into_view_target(rect, viewport, EDGE_MARGIN) {
                container.set_scroll_left(target.round() as i32);
            }
        }
    };

    if !wrap {
        // First measurement has to wait for the initial paint; afterwards the
        // window resize listener and the container's scroll events keep the
        // arrow state current. The listener closure is leaked, as usual for
        // page-lifetime listeners.
        let update = update_arrows.clone();
        Effect::new(move |prev: Option<()>| {
            if prev.is_some() {
                return;
            }
            let update_deferred = update.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(50).await;
                update_deferred();
            });

            let update_on_resize = update.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                update_on_resize();
            }) as Box<dyn FnMut(web_sys::Event)>);
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        });

        // Tab list changes move the overflow boundary; re-measure after the
        // DOM has updated.
        let update = update_arrows.clone();
        Effect::new(move |_| {
            tab_list.track();
            let update_deferred = update.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(0).await;
                update_deferred();
            });
        });
    }

    // --- Selection ---------------------------------------------------------
    let notify_change = move |previous: &str, next: &str| {
        if let Some(callback) = on_change {
            callback.run(store::change_event(&tabs.get_untracked(), previous, next));
        }
    };

    // A completed drag-scroll gesture latches a click suppression; the click
    // the browser fires on release is consumed here instead of selecting.
    let drag_scroll = StoredValue::new(DragScroll::default());

    let handle_select = move |key: String| {
        let suppressed = drag_scroll
            .try_update_value(|drag| drag.take_click_suppression())
            .unwrap_or(false);
        if suppressed {
            return;
        }
        let previous = selected.get_untracked();
        selected.set(key.clone());
        notify_change(&previous, &key);
    };

    let scroll_into_view_on_keys = scroll_into_view.clone();
    let handle_keydown = move |ev: web_sys::KeyboardEvent| {
        if !keyboard_navigation {
            return;
        }
        let direction = match ev.key().as_str() {
            "ArrowLeft" => Direction::Left,
            "ArrowRight" => Direction::Right,
            _ => return,
        };
        ev.prevent_default();
        let current = selected.get_untracked();
        let list = tab_list.get_untracked();
        let Some(next) = store::adjacent_key(&list, &current, direction) else {
            return;
        };
        let next = next.to_string();
        selected.set(next.clone());
        notify_change(&current, &next);
        if !wrap {
            scroll_into_view_on_keys(&next);
        }
    };

    // --- Close -------------------------------------------------------------
    // One outstanding confirmation per key; repeated requests are ignored
    // until the pending one resolves.
    let pending_closes = StoredValue::new(store::PendingCloses::default());

    let handle_close = move |key: String| {
        let Some(callback) = on_close else {
            return;
        };
        let started = pending_closes
            .try_update_value(|pending| pending.begin(&key))
            .unwrap_or(false);
        if !started {
            return;
        }

        let outcome = callback.run(key.clone());
        spawn_local(async move {
            let remove = outcome.resolve().await;
            pending_closes.update_value(|pending| pending.finish(&key));
            if !remove {
                return;
            }
            // The list may have been replaced while the confirmation was
            // pending; a vanished key makes the removal a no-op.
            let list = tab_list.get_untracked();
            let Some(plan) = store::plan_close(&list, &key, &selected.get_untracked()) else {
                return;
            };
            if let Some(next) = plan.next_selected {
                selected.set(next.clone());
                notify_change(&key, &next);
            }
            tab_list.set(plan.remaining);
        });
    };

    // --- Reorder -----------------------------------------------------------
    let dragging_key = RwSignal::new(None::<String>);

    let handle_drop = move |target_key: String| {
        let Some(source_key) = dragging_key.get_untracked() else {
            return;
        };
        dragging_key.set(None);
        let list = tab_list.get_untracked();
        let Some((reordered, event)) = store::plan_reorder(&list, &source_key, &target_key)
        else {
            return;
        };
        tab_list.set(reordered);
        if let Some(callback) = on_reorder {
            callback.run(event);
        }
    };

    // --- Pointer-drag scrolling ---------------------------------------------
    // Alternate scrolling input; never active together with reorder.
    let drag_to_scroll = !wrap && !draggable;

    let mouse_down_id = container_id.clone();
    let handle_mouse_down = move |ev: web_sys::MouseEvent| {
        if !drag_to_scroll {
            return;
        }
        let Some(container) = find_container(&mouse_down_id) else {
            return;
        };
        drag_scroll.update_value(|drag| {
            drag.press(ev.client_x() as f64, container.scroll_left() as f64);
        });
    };
    let mouse_move_id = container_id.clone();
    let handle_mouse_move = move |ev: web_sys::MouseEvent| {
        if !drag_to_scroll {
            return;
        }
        let offset = drag_scroll
            .try_update_value(|drag| drag.move_to(ev.client_x() as f64))
            .flatten();
        if let Some(offset) = offset {
            if let Some(container) = find_container(&mouse_move_id) {
                container.set_scroll_left(offset.round() as i32);
            }
        }
    };
    let handle_mouse_up = move |_: web_sys::MouseEvent| {
        if !drag_to_scroll {
            return;
        }
        drag_scroll.update_value(|drag| {
            drag.release();
        });
    };
    let handle_mouse_leave = move |_: web_sys::MouseEvent| {
        if !drag_to_scroll {
            return;
        }
        // No click follows a leave, so nothing to suppress.
        drag_scroll.update_value(|drag| drag.cancel());
    };

    // --- Render ------------------------------------------------------------
    let resolved = ResolvedStyles::resolve(&styles);
    let outer_style = resolved.outer_style();
    let container_style = resolved.container_style(wrap);

    let arrows_active = Signal::derive(move || !wrap && show_arrows && has_overflow.get());

    let inner_style = {
        let resolved = resolved.clone();
        move || resolved.inner_style(wrap, arrows_active.get())
    };

    let on_select = Callback::new(handle_select);
    let on_close_click = Callback::new(handle_close);
    let on_drop_on = Callback::new(handle_drop);

    let chips = {
        let resolved = resolved.clone();
        move || {
            tab_list
                .get()
                .into_iter()
                .map(|tab| {
                    let key = tab.key.clone();
                    let is_selected =
                        Signal::derive(move || selected.get() == key);
                    view! {
                        <ChipTab
                            tab=tab
                            selected=is_selected
                            show_close_button=show_close_button
                            draggable=draggable
                            styles=resolved.clone()
                            on_select=on_select
                            on_close=on_close_click
                            on_drop_on=on_drop_on
                            dragging_key=dragging_key
                        />
                    }
                })
                .collect_view()
        }
    };

    let step_left = scroll_step.clone();
    let step_right = scroll_step.clone();
    let update_on_scroll = update_arrows.clone();

    view! {
        <div class="chip-tabs-container" style=outer_style>
            <Show when=move || arrows_active.get()>
                {
                    let step = step_left.clone();
                    view! {
                        <ScrollArrow
                            direction=Direction::Left
                            enabled=show_left_arrow
                            on_click=Callback::new(move |_| step(Direction::Left))
                        />
                    }
                }
            </Show>
            <div
                id=container_id.clone()
                class=move || format!("chip-tabs-scroll {}", class.get().unwrap_or_default())
                style=container_style
                tabindex=keyboard_navigation.then_some("0")
                on:keydown=handle_keydown
                on:scroll=move |_| update_on_scroll()
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_mouse_up
                on:mouseleave=handle_mouse_leave
            >
                <div class="chip-tabs-content" style=inner_style>
                    {chips}
                </div>
            </div>
            <Show when=move || arrows_active.get()>
                {
                    let step = step_right.clone();
                    view! {
                        <ScrollArrow
                            direction=Direction::Right
                            enabled=show_right_arrow
                            on_click=Callback::new(move |_| step(Direction::Right))
                        />
                    }
                }
            </Show>
        </div>
    }
}

fn find_container(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn measure_viewport(container: &web_sys::Element) -> Viewport {
    Viewport {
        scroll_left: container.scroll_left() as f64,
        client_width: container.client_width() as f64,
        scroll_width: container.scroll_width() as f64,
    }
}

/// Tab rectangles in content coordinates, in DOM order.
fn measure_tab_rects(container: &web_sys::Element) -> Vec<(String, TabRect)> {
    let scroll_left = container.scroll_left() as f64;
    let origin = container.get_bounding_client_rect().left();
    let Ok(nodes) = container.query_selector_all("[data-tab-key]") else {
        return Vec::new();
    };
    let mut rects = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let Some(key) = element.get_attribute("data-tab-key") else {
            continue;
        };
        let bounds = element.get_bounding_client_rect();
        let left = bounds.left() - origin + scroll_left;
        rects.push((
            key,
            TabRect {
                left,
                right: left + bounds.width(),
            },
        ));
    }
    rects
}
