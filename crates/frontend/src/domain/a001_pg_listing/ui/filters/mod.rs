//! Форма фильтров PG: локация, диапазон цены, тип, вместимость, удобства.
//!
//! Каждый контрол отправляет ровно один `FilterUpdate` через `on_update`.
//! Поля держат сырой ввод; из состояния фильтров они перечитываются только
//! когда `reset_epoch` меняется (чип, "Clear all").

use crate::shared::icons::icon;
use crate::shared::list_utils::{forward_changes, sync_control, synced_price_text};
use contracts::domain::a001_pg_listing::{FilterState, FilterUpdate};
use contracts::enums::PgType;
use contracts::shared::config::FilterOptionsConfig;
use leptos::prelude::*;
use thaw::*;

/// Чекбокс на каждую метку из конфига
fn label_boxes(labels: Vec<String>) -> Vec<(String, RwSignal<bool>)> {
    labels
        .into_iter()
        .map(|label| (label, RwSignal::new(false)))
        .collect()
}

#[component]
pub fn SearchFilters(
    /// Current filter state (read only)
    #[prop(into)]
    filters: Signal<FilterState>,
    /// Receives one update per control interaction
    on_update: Callback<FilterUpdate>,
    /// Bumped after every change made outside this form
    #[prop(into)]
    reset_epoch: Signal<u64>,
    /// Checkbox labels from the catalog config
    options: FilterOptionsConfig,
    #[prop(into)]
    currency_symbol: String,
) -> impl IntoView {
    // Сырой текст полей: цена "1." ещё не число, но стирать её при вводе нельзя
    let location = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let pg_type = RwSignal::new(String::new());
    let occupancy_boxes = label_boxes(options.occupancy);
    let amenity_boxes = label_boxes(options.amenities);

    forward_changes(location, move |v| on_update.run(FilterUpdate::Location(v)));
    forward_changes(min_price, move |v| on_update.run(FilterUpdate::MinPrice(v)));
    forward_changes(max_price, move |v| on_update.run(FilterUpdate::MaxPrice(v)));
    forward_changes(pg_type, move |v| on_update.run(FilterUpdate::Type(v)));

    for (label, checked) in occupancy_boxes.iter().cloned() {
        forward_changes(checked, move |v| {
            if filters.with_untracked(|f| f.occupancy.contains(&label)) != v {
                on_update.run(FilterUpdate::occupancy(label.clone(), v));
            }
        });
    }
    for (label, checked) in amenity_boxes.iter().cloned() {
        forward_changes(checked, move |v| {
            if filters.with_untracked(|f| f.amenities.contains(&label)) != v {
                on_update.run(FilterUpdate::amenity(label.clone(), v));
            }
        });
    }

    // Фильтр изменён снаружи -> поля показывают состояние, мусорный ввод стирается
    let synced_occupancy = occupancy_boxes.clone();
    let synced_amenities = amenity_boxes.clone();
    let first_sync = StoredValue::new(true);
    Effect::new(move |_| {
        reset_epoch.track();
        if first_sync.get_value() {
            first_sync.set_value(false);
            return;
        }
        filters.with_untracked(|f| {
            sync_control(location, f.location.clone().unwrap_or_default());
            sync_control(
                min_price,
                synced_price_text(&min_price.get_untracked(), f.min_price),
            );
            sync_control(
                max_price,
                synced_price_text(&max_price.get_untracked(), f.max_price),
            );
            sync_control(
                pg_type,
                f.pg_type
                    .as_ref()
                    .map(|t| t.code().to_string())
                    .unwrap_or_default(),
            );
            for (label, checked) in &synced_occupancy {
                sync_control(*checked, f.occupancy.contains(label));
            }
            for (label, checked) in &synced_amenities {
                sync_control(*checked, f.amenities.contains(label));
            }
        });
    });

    let occupancy_chips = occupancy_boxes
        .into_iter()
        .map(|(label, checked)| view! { <Checkbox checked=checked label=label /> })
        .collect_view();

    let amenity_chips = amenity_boxes
        .into_iter()
        .map(|(label, checked)| view! { <Checkbox checked=checked label=label /> })
        .collect_view();

    let min_currency = currency_symbol.clone();
    let max_currency = currency_symbol;

    view! {
        <div class="search-filters">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>{icon("map-pin")}"Location"</Label>
                <Input value=location placeholder="Enter location" />
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>{icon("rupee")}"Price Range"</Label>
                <Flex gap=FlexGap::Small>
                    <div class="form__prefixed">
                        <span class="form__prefix">{min_currency}</span>
                        <Input value=min_price placeholder="Min" />
                    </div>
                    <div class="form__prefixed">
                        <span class="form__prefix">{max_currency}</span>
                        <Input value=max_price placeholder="Max" />
                    </div>
                </Flex>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>{icon("users")}"PG Type"</Label>
                <Select value=pg_type>
                    <option value="">"All Types"</option>
                    {PgType::all()
                        .into_iter()
                        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                        .collect_view()}
                </Select>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>{icon("home")}"Occupancy"</Label>
                <div class="filter-chip-grid">{occupancy_chips}</div>
            </Flex>

            <Flex vertical=true gap=FlexGap::Small>
                <Label>{icon("wifi")}"Amenities"</Label>
                <div class="filter-chip-grid">{amenity_chips}</div>
            </Flex>
        </div>
    }
}
