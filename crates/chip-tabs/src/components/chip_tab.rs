use leptos::prelude::*;

use crate::icons::icon;
use crate::types::Tab;

use super::style::ResolvedStyles;

/// One chip: optional icon, label, optional close button. Hover state is
/// local; selection and drag state come from the strip. The root carries a
/// `data-tab-key` attribute the scroll coordinator measures by.
#[component]
pub(crate) fn ChipTab(
    tab: Tab,
    #[prop(into)] selected: Signal<bool>,
    /// Close buttons enabled on the strip (per-tab `hide_close_button` still
    /// suppresses this one).
    show_close_button: bool,
    /// Reorder enabled; makes the chip a native drag source and drop target.
    draggable: bool,
    styles: ResolvedStyles,
    on_select: Callback<String>,
    on_close: Callback<String>,
    /// Drop completed on this chip; the payload is this chip's key (the
    /// reorder target).
    on_drop_on: Callback<String>,
    /// Key currently being dragged, shared across the strip.
    dragging_key: RwSignal<Option<String>>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let (close_hovered, set_close_hovered) = signal(false);

    let key = tab.key.clone();
    let with_close = show_close_button && !tab.hide_close_button;

    let key_for_style = key.clone();
    let styles_for_chip = styles.clone();
    let chip_style = move || {
        let mut style = styles_for_chip.chip_style(selected.get(), hovered.get(), with_close);
        if draggable {
            style.push_str(" cursor: grab;");
            if dragging_key.get().as_deref() == Some(key_for_style.as_str()) {
                style.push_str(" opacity: 0.5;");
            }
        }
        style
    };

    let key_for_click = key.clone();
    let key_for_dragstart = key.clone();
    let key_for_drop = key.clone();
    let key_for_close = key.clone();

    let close_button = with_close.then(|| {
        let styles = styles.clone();
        let close_style =
            move || styles.close_button_style(selected.get(), close_hovered.get(), hovered.get());
        view! {
            <span
                class="chip-tab-close"
                style=close_style
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_close.run(key_for_close.clone());
                }
                on:mouseenter=move |_| set_close_hovered.set(true)
                on:mouseleave=move |_| set_close_hovered.set(false)
            >
                {icon("close")}
            </span>
        }
    });

    view! {
        <div
            class="chip-tab"
            data-tab-key=key.clone()
            data-selected=move || if selected.get() { "true" } else { "false" }
            style=chip_style
            draggable=if draggable { "true" } else { "false" }
            on:click=move |_| on_select.run(key_for_click.clone())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| {
                set_hovered.set(false);
                set_close_hovered.set(false);
            }
            on:dragstart=move |_| dragging_key.set(Some(key_for_dragstart.clone()))
            on:dragover=move |ev| {
                // Required so the chip is a valid drop target.
                if draggable {
                    ev.prevent_default();
                }
            }
            on:drop=move |ev| {
                ev.prevent_default();
                on_drop_on.run(key_for_drop.clone());
            }
            on:dragend=move |_| dragging_key.set(None)
        >
            {tab.icon.as_deref().map(|name| {
                view! {
                    <span style="display: flex; align-items: center; margin-right: 0.375rem;">
                        {icon(name)}
                    </span>
                }
            })}
            <span>{tab.label.clone()}</span>
            {close_button}
        </div>
    }
}
