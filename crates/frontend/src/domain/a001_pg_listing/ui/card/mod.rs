use crate::shared::icons::icon;
use crate::shared::list_utils::{format_inr, highlight_matches};
use contracts::domain::a001_pg_listing::Listing;
use contracts::enums::PgType;
use leptos::prelude::*;
use thaw::*;

fn type_badge_color(pg_type: PgType) -> BadgeColor {
    match pg_type {
        PgType::Male => BadgeColor::Informative,
        PgType::Female => BadgeColor::Important,
        PgType::Unisex => BadgeColor::Success,
    }
}

/// Карточка PG в сетке результатов
#[component]
pub fn PgCard(
    listing: Listing,
    /// Search text, highlighted in name and address
    #[prop(into)]
    search: Signal<String>,
    #[prop(into)]
    currency_symbol: String,
) -> impl IntoView {
    let cover = listing.cover_image().map(str::to_string);
    let Listing {
        name,
        address,
        city,
        price,
        rating,
        pg_type,
        amenities,
        occupancy,
        ..
    } = listing;

    let alt = name.clone();
    let price_text = format!("{}{}", currency_symbol, format_inr(price));

    view! {
        <article class="pg-card">
            {cover.map(|src| view! {
                <img class="pg-card__image" src=src alt=alt loading="lazy" />
            })}
            <div class="pg-card__body">
                <div class="pg-card__header">
                    <h3 class="pg-card__name">{move || highlight_matches(&name, &search.get())}</h3>
                    <Badge appearance=BadgeAppearance::Tint color=type_badge_color(pg_type)>
                        {pg_type.display_name()}
                    </Badge>
                </div>
                <p class="pg-card__address">
                    {icon("map-pin")}
                    {move || highlight_matches(&address, &search.get())}
                </p>
                <div class="pg-card__meta">
                    <span class="pg-card__city">{city}</span>
                    <span class="pg-card__rating">{icon("star")}{format!("{:.1}", rating)}</span>
                </div>
                <div class="pg-card__chips">
                    {occupancy
                        .into_iter()
                        .map(|o| view! { <span class="chip chip--occupancy">{o}</span> })
                        .collect_view()}
                </div>
                <div class="pg-card__chips">
                    {amenities
                        .into_iter()
                        .map(|a| view! { <span class="chip">{a}</span> })
                        .collect_view()}
                </div>
                <div class="pg-card__footer">
                    <span class="pg-card__price">{price_text}</span>
                    <span class="pg-card__period">"/month"</span>
                </div>
            </div>
        </article>
    }
}
