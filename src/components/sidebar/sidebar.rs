use std::collections::HashSet;

use leptos::prelude::*;
use leptos_icons::Icon;

use super::group::GroupItem;
use crate::app::{AppContext, CatalogStatus};
use crate::components::icons as ic;
use crate::config::{APP_SUBTITLE, APP_TITLE};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Catalog sidebar with header, refresh button and group list.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Expanded group names; survives catalog refreshes.
    let expanded = RwSignal::new(HashSet::<String>::new());

    let is_empty = Memo::new(move |_| ctx.catalog.with(Vec::is_empty));
    let failed = Memo::new(move |_| match ctx.catalog_status.get() {
        CatalogStatus::Failed(msg) => Some(msg),
        _ => None,
    });

    view! {
        <aside class=css::sidebar>
            <header class=css::header>
                <div class=css::headerText>
                    <h1 class=css::title>
                        <Icon icon=ic::LAYERS />
                        {APP_TITLE}
                    </h1>
                    <p class=css::subtitle>{APP_SUBTITLE}</p>
                </div>
                <button
                    class=move || {
                        if ctx.refreshing.get() {
                            format!("{} {}", css::refreshButton, css::refreshButtonBusy)
                        } else {
                            css::refreshButton.to_string()
                        }
                    }
                    on:click=move |_| ctx.load_catalog()
                    disabled=move || ctx.refreshing.get()
                    title="Actualiser"
                    aria-label="Actualiser le catalogue"
                >
                    <Icon icon=ic::REFRESH />
                </button>
            </header>

            {move || failed.get().map(|msg| view! {
                <div class=css::error title=msg>"Catalogue indisponible"</div>
            })}

            <div class=css::groups>
                <Show
                    when=move || !is_empty.get()
                    fallback=|| view! { <div class=css::empty>"Aucune couche trouvée."</div> }
                >
                    <For
                        each=move || ctx.catalog.get()
                        key=|group| group.clone()
                        children=move |group| view! { <GroupItem group=group expanded=expanded /> }
                    />
                </Show>
            </div>
        </aside>
    }
}
