use leptos::prelude::*;

use crate::icons::icon;
use crate::types::Direction;

/// Scroll arrow overlay pinned to one side of the strip: a gradient fade with
/// a circular button. Dimmed and click-inert while its direction has nothing
/// left to scroll.
#[component]
pub fn ScrollArrow(
    /// Which edge the arrow sits on and scrolls toward.
    direction: Direction,
    /// Whether this direction can still scroll.
    #[prop(into)]
    enabled: Signal<bool>,
    /// Click handler; invoked only while enabled.
    on_click: Callback<()>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    let container_style = move || {
        let side = match direction {
            Direction::Left => {
                "left: 0; background: linear-gradient(to right, #ffffff 0%, #ffffff 60%, \
                 rgba(255, 255, 255, 0) 100%);"
            }
            Direction::Right => {
                "right: 0; background: linear-gradient(to left, #ffffff 0%, #ffffff 60%, \
                 rgba(255, 255, 255, 0) 100%);"
            }
        };
        format!(
            "position: absolute; top: 0; height: 100%; width: 2.5rem; display: flex; \
             align-items: center; justify-content: center; z-index: 10; \
             transition: opacity 0.2s; user-select: none; opacity: {}; pointer-events: {}; {}",
            if enabled.get() { "1" } else { "0.3" },
            if enabled.get() { "auto" } else { "none" },
            side,
        )
    };

    let button_style = move || {
        format!(
            "width: 2rem; height: 2rem; border-radius: 50%; display: flex; \
             align-items: center; justify-content: center; transition: background-color 0.2s; \
             cursor: {}; background-color: {};",
            if enabled.get() { "pointer" } else { "default" },
            if hovered.get() && enabled.get() {
                "#f3f4f6"
            } else {
                "transparent"
            },
        )
    };

    let icon_style = move || {
        format!(
            "display: flex; align-items: center; justify-content: center; \
             transition: opacity 0.2s; opacity: {};",
            if hovered.get() && enabled.get() { "1" } else { "0.5" },
        )
    };

    view! {
        <div class="chip-tabs-scroll-arrow" style=container_style>
            <div
                style=button_style
                on:click=move |_| {
                    if enabled.get_untracked() {
                        on_click.run(());
                    }
                }
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <div style=icon_style>
                    {icon(match direction {
                        Direction::Left => "chevron-left",
                        Direction::Right => "chevron-right",
                    })}
                </div>
            </div>
        </div>
    }
}
