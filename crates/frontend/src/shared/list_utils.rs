//! Утилиты списочных страниц: привязка выбора строк `ListPage` к чекбоксам
//! таблицы, значения фильтров из полей ввода и подсветка совпадений.

use contracts::domain::common::AggregateRoot;
use contracts::shared::list::{ListFilter, ListPage};
use contracts::enums::RecordStatus;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Видимые (прошедшие фильтр) записи страницы
pub fn visible_rows<T, F>(page: RwSignal<ListPage<T, F>>) -> Vec<T>
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
    T::Id: Send + Sync,
    F: ListFilter<T> + Default + Clone + Send + Sync + 'static,
{
    page.with(|p| p.visible().into_iter().cloned().collect())
}

/// Сигналы чекбокса в заголовке: (все выбраны, выбраны частично, обработчик)
pub fn header_selection<T, F>(
    page: RwSignal<ListPage<T, F>>,
) -> (Signal<bool>, Signal<bool>, Callback<bool>)
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
    T::Id: Send + Sync,
    F: ListFilter<T> + Default + Clone + Send + Sync + 'static,
{
    let checked = Signal::derive(move || page.with(|p| p.all_visible_selected()));
    let indeterminate = Signal::derive(move || page.with(|p| p.selected_count() > 0));
    let on_change = Callback::new(move |check_all: bool| {
        page.update(|p| p.set_all_visible(check_all));
    });
    (checked, indeterminate, on_change)
}

/// Сигналы чекбокса строки
pub fn row_selection<T, F>(page: RwSignal<ListPage<T, F>>, id: T::Id) -> (Signal<bool>, Callback<bool>)
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
    T::Id: Send + Sync,
    F: ListFilter<T> + Default + Clone + Send + Sync + 'static,
{
    let checked = Signal::derive(move || page.with(|p| p.is_selected(id)));
    let on_change = Callback::new(move |value: bool| {
        page.update(|p| p.set_selected(id, value));
    });
    (checked, on_change)
}

/// Статус в ячейке таблицы
pub fn status_badge(label: &'static str, color: BadgeColor) -> AnyView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
    .into_any()
}

pub fn record_status_badge(status: RecordStatus) -> AnyView {
    let color = match status {
        RecordStatus::Active => BadgeColor::Success,
        RecordStatus::Inactive => BadgeColor::Informative,
    };
    status_badge(status.display_name(), color)
}

/// Значение перечисления по коду из `<Select>`; пустой код означает "全部"
pub fn pick_by_code<T: Copy>(all: Vec<T>, code: &str, code_of: impl Fn(&T) -> &'static str) -> Option<T> {
    if code.is_empty() {
        return None;
    }
    all.into_iter().find(|item| code_of(item) == code)
}

/// Непустая строка фильтра или `None`
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // смещения в нижнем регистре совпадают с исходными только для ASCII/CJK
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="table__highlight">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::RecordStatus;

    #[test]
    fn test_pick_by_code() {
        let code_of = |s: &RecordStatus| s.code();
        assert_eq!(pick_by_code(RecordStatus::all(), "", code_of), None);
        assert_eq!(
            pick_by_code(RecordStatus::all(), RecordStatus::Inactive.code(), code_of),
            Some(RecordStatus::Inactive)
        );
        assert_eq!(pick_by_code(RecordStatus::all(), "???", code_of), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" MEX "), Some("MEX".to_string()));
    }
}
