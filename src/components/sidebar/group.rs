//! One catalog group and its file rows.

use std::collections::HashSet;

use geoview_core::{Color, GroupCheckState, LayerGroup, LayerId, LayerStatus, display_name};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn GroupItem(group: LayerGroup, expanded: RwSignal<HashSet<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = group.group_name.clone();
    let file_count = group.files.len();
    let group = StoredValue::new(group);

    let is_open = {
        let name = name.clone();
        Memo::new(move |_| expanded.with(|set| set.contains(&name)))
    };
    let check_state = Memo::new(move |_| {
        ctx.selection
            .with(|selection| group.with_value(|g| selection.group_check_state(g)))
    });

    let on_expand = {
        let name = name.clone();
        move |_: leptos::ev::MouseEvent| {
            expanded.update(|set| {
                if !set.remove(&name) {
                    set.insert(name.clone());
                }
            })
        }
    };
    let on_check = move |_: leptos::ev::Event| group.with_value(|g| ctx.toggle_group(g));

    view! {
        <div class=css::group>
            <div class=css::groupHeader>
                <input
                    type="checkbox"
                    class=css::checkbox
                    prop:checked=move || check_state.get() == GroupCheckState::All
                    prop:indeterminate=move || check_state.get() == GroupCheckState::Some
                    on:change=on_check
                    aria-label=format!("Activer toutes les couches de {}", name)
                />
                <button
                    class=css::groupToggle
                    on:click=on_expand
                    aria-expanded=move || is_open.get().to_string()
                >
                    <span class=css::chevron>
                        {move || if is_open.get() {
                            view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                        }}
                    </span>
                    <span class=css::groupName>{name.clone()}</span>
                    <span class=css::badge>{file_count}</span>
                </button>
            </div>

            <Show when=move || is_open.get()>
                <div class=css::files>
                    {move || group.with_value(|g| {
                        g.files
                            .iter()
                            .map(|file| view! {
                                <FileRow group_name=g.group_name.clone() file_name=file.clone() />
                            })
                            .collect_view()
                    })}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FileRow(group_name: String, file_name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = LayerId::new(&group_name, &file_name);
    let label = display_name(&file_name).to_string();
    let picker_label = format!("Couleur de {}", label);

    let active = {
        let id = id.clone();
        Memo::new(move |_| ctx.selection.with(|s| s.is_active(&id)))
    };
    let color = {
        let id = id.clone();
        Memo::new(move |_| ctx.selection.with(|s| s.color(&id)).unwrap_or_default())
    };
    let status = {
        let id = id.clone();
        Memo::new(move |_| ctx.layer_status.with(|statuses| statuses.get(&id).cloned()))
    };

    let on_toggle = move |_: leptos::ev::Event| ctx.toggle_layer(&group_name, &file_name);
    let on_color = move |ev: leptos::ev::Event| {
        if let Ok(color) = event_target_value(&ev).parse::<Color>() {
            ctx.set_layer_color(&id, color);
        }
    };

    view! {
        <div class=move || {
            if active.get() {
                format!("{} {}", css::fileRow, css::fileRowActive)
            } else {
                css::fileRow.to_string()
            }
        }>
            <label class=css::fileLabel>
                <input
                    type="checkbox"
                    class=css::checkbox
                    prop:checked=move || active.get()
                    on:change=on_toggle
                />
                <span class=css::fileName title=label.clone()>{label.clone()}</span>
            </label>
            <Show when=move || active.get()>
                <StatusMarker status=status />
                <input
                    type="color"
                    class=css::colorPicker
                    prop:value=move || color.get().to_hex()
                    on:input=on_color.clone()
                    title="Couleur"
                    aria-label=picker_label.clone()
                />
            </Show>
        </div>
    }
}

#[component]
fn StatusMarker(status: Memo<Option<LayerStatus>>) -> impl IntoView {
    move || match status.get() {
        Some(LayerStatus::Loading) => view! {
            <span class=css::statusLoading title="Chargement…">
                <Icon icon=ic::LOADING />
            </span>
        }
        .into_any(),
        Some(LayerStatus::Failed(err)) => view! {
            <span class=css::statusFailed title=err.to_string()>
                <Icon icon=ic::WARNING />
            </span>
        }
        .into_any(),
        Some(LayerStatus::Empty) => view! {
            <span class=css::statusEmpty title="Aucune géométrie">"∅"</span>
        }
        .into_any(),
        Some(LayerStatus::Ready) | None => ().into_any(),
    }
}
