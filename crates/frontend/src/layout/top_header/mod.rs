//! TopHeader component - application top bar with the brand title.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader(
    /// Brand title from the catalog config
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <header class="top-header">
            <div class="top-header__brand">
                {icon("building")}
                <h1 class="top-header__title">{title}</h1>
            </div>
        </header>
    }
}
