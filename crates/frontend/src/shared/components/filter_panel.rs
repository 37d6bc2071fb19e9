use crate::shared::icons::icon;
use contracts::domain::a001_pg_listing::{ActiveFilter, FilterUpdate};
use leptos::prelude::*;
use thaw::*;

/// FilterPanel component - card with a header (title, active count, clear all),
/// the filter form and the active filter chips.
#[component]
pub fn FilterPanel(
    /// Active filters, rendered as removable chips
    #[prop(into)]
    active_filters: Signal<Vec<ActiveFilter>>,

    /// True while nothing is filtered (search included); disables "Clear all"
    #[prop(into)]
    is_default: Signal<bool>,

    /// Receives chip removals and "clear all"
    on_update: Callback<FilterUpdate>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let active_count = move || active_filters.with(|f| f.len());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || active_count() != 0>
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            {active_count}
                        </Badge>
                    </Show>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=is_default
                    on_click=move |_| on_update.run(FilterUpdate::Reset)
                >
                    "Clear all"
                </Button>
            </div>

            <div class="filter-panel-tags">
                {move || {
                    active_filters
                        .get()
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <FilterTag
                                    label=filter.label
                                    on_remove=Callback::new(move |_| on_update.run(filter.removal.clone()))
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="filter-panel-content">
                {children()}
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <Button
                appearance=ButtonAppearance::Transparent
                size=ButtonSize::Small
                on_click=move |_| on_remove.run(())
                attr:class="filter-tag__remove"
                attr:title="Remove filter"
            >
                {icon("x")}
            </Button>
        </div>
    }
}
