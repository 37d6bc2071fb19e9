pub mod state;

use self::state::{create_state, default_source, load_listings};
use crate::domain::a001_pg_listing::ui::card::PgCard;
use crate::domain::a001_pg_listing::ui::filters::SearchFilters;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::icons::icon;
use crate::shared::list_utils::{forward_changes, sync_control, SearchInput};
use contracts::domain::a001_pg_listing::{filter_listings, FilterUpdate, Listing};
use contracts::shared::config::CatalogConfig;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn PgListingPage() -> impl IntoView {
    let config = use_context::<CatalogConfig>().expect("CatalogConfig not found");
    let state = create_state();

    let (listings, load_error) = load_listings(&default_source());
    log!("PG listing page mounted with {} listings", listings.len());
    let listings = StoredValue::new(listings);

    let apply = Callback::new(move |update: FilterUpdate| {
        state.update(|m| {
            m.apply_update(update);
        });
    });

    let filters = Memo::new(move |_| state.with(|m| m.state().clone()));
    let active_filters = Signal::derive(move || filters.with(|f| f.active_filters()));
    let is_default = Signal::derive(move || filters.with(|f| f.is_default()));
    let search_text = Signal::derive(move || filters.with(|f| f.search_text.clone()));

    // Изменения из панели (чипы, "Clear all") -> поля формы перечитывают состояние
    let reset_epoch = RwSignal::new(0u64);
    let apply_from_panel = Callback::new(move |update: FilterUpdate| {
        apply.run(update);
        reset_epoch.update(|n| *n += 1);
    });

    let search = RwSignal::new(String::new());
    forward_changes(search, move |text: String| {
        if text.is_empty() {
            apply.run(FilterUpdate::ClearSearch);
        } else {
            apply.run(FilterUpdate::Search(text));
        }
    });
    let first_sync = StoredValue::new(true);
    Effect::new(move |_| {
        reset_epoch.track();
        if first_sync.get_value() {
            first_sync.set_value(false);
            return;
        }
        sync_control(search, search_text.get_untracked());
    });

    // Пересчёт результата целиком на каждое изменение фильтров
    let filtered = Memo::new(move |_| {
        filters.with(|f| {
            listings.with_value(|all| {
                filter_listings(all, f)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Listing>>()
            })
        })
    });

    let currency_symbol = config.app.currency_symbol.clone();
    let filters_currency = currency_symbol.clone();
    let filter_options = config.filters.clone();
    let search_placeholder = config.app.search_placeholder.clone();

    view! {
        <div class="page pg-listing">
            <SearchInput value=search placeholder=search_placeholder />

            {load_error.map(|msg| view! { <p class="error-banner">{msg}</p> })}

            <div class="pg-listing__layout">
                <aside class="pg-listing__filters">
                    <FilterPanel
                        active_filters=active_filters
                        is_default=is_default
                        on_update=apply_from_panel
                    >
                        <SearchFilters
                            filters=filters
                            on_update=apply
                            reset_epoch=reset_epoch
                            options=filter_options
                            currency_symbol=filters_currency
                        />
                    </FilterPanel>
                </aside>

                <section class="pg-listing__results">
                    <p class="pg-listing__count">
                        {move || format!("{} PGs found", filtered.with(|items| items.len()))}
                    </p>
                    {move || {
                        if filtered.with(|items| items.is_empty()) {
                            view! {
                                <div class="empty-state">
                                    {icon("building")}
                                    <h3 class="empty-state__title">"No PGs Found"</h3>
                                    <p class="empty-state__text">
                                        "We couldn't find any PGs matching your criteria. Try adjusting your filters or search terms."
                                    </p>
                                </div>
                            }
                            .into_any()
                        } else {
                            let currency_symbol = currency_symbol.clone();
                            view! {
                                <div class="pg-grid">
                                    <For
                                        each=move || filtered.get()
                                        key=|listing: &Listing| listing.id
                                        children=move |listing: Listing| {
                                            view! {
                                                <PgCard
                                                    listing=listing
                                                    search=search_text
                                                    currency_symbol=currency_symbol.clone()
                                                />
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
