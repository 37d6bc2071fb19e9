/// Утилиты для списка PG: подсветка совпадений, форматирование цен, поле поиска
use crate::shared::icons::icon;
use contracts::shared::number_parse::parse_price;
use leptos::prelude::*;
use thaw::*;

/// Byte ranges of case-insensitive occurrences of `filter` in `text`.
///
/// Empty when the filter is blank or when lowercasing changes the byte
/// length of `text` (ranges would not map back onto the original).
/// Non-blank filters are used as typed, same as the listing search.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.trim().is_empty() {
        return Vec::new();
    }
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-hit">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Formats a rupee amount with Indian digit grouping: 150000 -> "1,50,000".
/// Fractions are rounded to whole rupees.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Text a price box should show after the filter was changed from outside
/// (chip removal, "Clear all").
///
/// Unset bound -> empty box, whatever was typed. A set bound keeps the typed
/// text while it still parses to the same value ("12000.0" stays as is).
pub fn synced_price_text(current: &str, bound: Option<f64>) -> String {
    match bound {
        None => String::new(),
        Some(value) if parse_price(current) == Some(value) => current.to_string(),
        Some(value) => value.to_string(),
    }
}

/// Вызывает `emit` на каждое изменение контрола; первый запуск эффекта пропускается
pub fn forward_changes<T>(control: RwSignal<T>, emit: impl Fn(T) + 'static)
where
    T: Clone + Send + Sync + 'static,
{
    let first_run = StoredValue::new(true);
    Effect::new(move |_| {
        let value = control.get();
        if first_run.get_value() {
            first_run.set_value(false);
            return;
        }
        emit(value);
    });
}

/// Пишет в сигнал контрола только новое значение, чтобы не будить `forward_changes` зря
pub fn sync_control<T>(control: RwSignal<T>, value: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    if control.with_untracked(|current| *current != value) {
        control.set(value);
    }
}

/// Поле глобального поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текст поиска, привязан к полю ввода
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-box__icon">{icon("search")}</span>
            <div class="search-box__input">
                <Input value=value placeholder=placeholder />
            </div>
            <Show when=move || !value.get().is_empty()>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| value.set(String::new())
                    attr:class="search-box__clear"
                    attr:title="Clear search"
                >
                    {icon("x")}
                </Button>
            </Show>
        </div>
    }
}
