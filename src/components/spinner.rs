use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/spinner.module.css");

/// Centered loading indicator.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class=css::overlay>
            <div class=css::spinner role="status" aria-label="Chargement"></div>
        </div>
    }
}
