use geoview_core::Basemap;
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/map/map.module.css");

/// Radio group choosing the background tiles.
#[component]
pub fn BasemapSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::basemapSwitcher role="radiogroup" aria-label="Fond de carte">
            {Basemap::ALL
                .into_iter()
                .map(|basemap| view! {
                    <label class=css::basemapOption>
                        <input
                            type="radio"
                            name="basemap"
                            value=basemap.key()
                            prop:checked=move || ctx.basemap.get() == basemap
                            on:change=move |_| ctx.set_basemap(basemap)
                        />
                        <span>{basemap.label()}</span>
                    </label>
                })
                .collect_view()}
        </div>
    }
}
