//! Tool mode buttons.

use geoview_core::ToolMode;
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/map/map.module.css");

/// Button title and icon for each mode.
fn tool_face(mode: ToolMode) -> (&'static str, IconData) {
    match mode {
        ToolMode::Navigate => ("Naviguer", ic::NAVIGATE),
        ToolMode::Select => ("Sélectionner entité", ic::SELECT),
        ToolMode::Draw => ("Dessiner ROI (Rectangle)", ic::DRAW),
    }
}

/// Mode buttons, plus the ROI count and clear button while drawing.
#[component]
pub fn Toolbar(on_clear: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let drawing = Memo::new(move |_| ctx.tool_mode.get() == ToolMode::Draw);

    view! {
        <div class=css::toolbar role="toolbar" aria-label="Outils">
            {ToolMode::ALL.into_iter().map(|mode| view! { <ToolButton mode=mode /> }).collect_view()}
            <Show when=move || drawing.get()>
                <span class=css::roiCount title="Rectangles dessinés">
                    {move || ctx.roi_count.get()}
                </span>
                <button
                    class=css::clearButton
                    on:click=move |_| on_clear.run(())
                    disabled=move || ctx.roi_count.get() == 0
                    title="Effacer les dessins"
                    aria-label="Effacer les dessins"
                >
                    <Icon icon=ic::TRASH />
                </button>
            </Show>
        </div>
    }
}

#[component]
fn ToolButton(mode: ToolMode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (title, icon) = tool_face(mode);
    let pressed = Memo::new(move |_| ctx.tool_mode.get() == mode);

    view! {
        <button
            class=move || {
                if pressed.get() {
                    format!("{} {}", css::toolButton, css::toolButtonActive)
                } else {
                    css::toolButton.to_string()
                }
            }
            on:click=move |_| ctx.set_tool_mode(mode)
            aria-label=title
            aria-pressed=move || pressed.get().to_string()
            title=title
        >
            <Icon icon=icon />
        </button>
    }
}
