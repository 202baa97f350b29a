//! Attribute panel for the picked feature.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/map/map.module.css");

/// Shown while a feature is selected; one row per attribute, in source order.
#[component]
pub fn Inspector(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        ctx.selected_feature.get().map(|feature| {
            let rows = if feature.is_empty() {
                view! { <p class=css::noAttributes>"Aucun attribut"</p> }.into_any()
            } else {
                feature
                    .attributes()
                    .iter()
                    .map(|attribute| view! {
                        <div class=css::attribute>
                            <span class=css::attributeName>{attribute.name.clone()}</span>
                            <span class=css::attributeValue>{attribute.display_value()}</span>
                        </div>
                    })
                    .collect_view()
                    .into_any()
            };

            view! {
                <section class=css::inspector aria-label="Attributs">
                    <header class=css::inspectorHeader>
                        <h3 class=css::inspectorTitle>"Attributs"</h3>
                        <button
                            class=css::closeButton
                            on:click=move |_| on_close.run(())
                            title="Fermer"
                            aria-label="Fermer"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>
                    <div class=css::attributes>{rows}</div>
                </section>
            }
        })
    }
}
