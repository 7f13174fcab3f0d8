//! Универсальный контроллер списочной страницы: записи, фильтр и выбор строк.
//!
//! Каждая страница владеет своим `ListPage` и меняет его только через методы
//! ниже; отображаемый набор всегда вычисляется из записей и фильтра.

use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::error::RecordError;
use std::collections::HashSet;
use std::hash::Hash;

/// Фильтр списочной страницы
pub trait ListFilter<T> {
    /// Проверяет, проходит ли запись фильтр
    fn matches(&self, item: &T) -> bool;

    /// Количество заполненных условий (для бейджа панели фильтров)
    fn active_count(&self) -> usize;
}

/// Поиск подстроки без учёта регистра; пустой запрос совпадает со всем
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Набор выбранных строк
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id: Eq + Hash> {
    ids: HashSet<Id>,
}

impl<Id: Eq + Hash + Copy> Default for Selection<Id> {
    fn default() -> Self {
        Self { ids: HashSet::new() }
    }
}

impl<Id: Eq + Hash + Copy> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn set(&mut self, id: Id, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = Id>) {
        self.ids.extend(ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn retain(&mut self, keep: impl Fn(&Id) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }
}

/// Состояние списочной страницы
#[derive(Debug, Clone)]
pub struct ListPage<T: AggregateRoot, F> {
    items: Vec<T>,
    filter: F,
    selection: Selection<T::Id>,
}

impl<T, F> ListPage<T, F>
where
    T: AggregateRoot + Clone,
    F: ListFilter<T> + Default + Clone,
{
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            filter: F::default(),
            selection: Selection::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    // ------------------------------------------------------------------
    // Фильтр
    // ------------------------------------------------------------------

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    pub fn update_filter(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.filter);
    }

    pub fn reset_filter(&mut self) {
        self.filter = F::default();
    }

    pub fn active_filters_count(&self) -> usize {
        self.filter.active_count()
    }

    /// Записи, прошедшие фильтр, в исходном порядке
    pub fn visible(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    // ------------------------------------------------------------------
    // Выбор строк
    // ------------------------------------------------------------------

    pub fn is_selected(&self, id: T::Id) -> bool {
        self.selection.contains(&id)
    }

    pub fn toggle(&mut self, id: T::Id) {
        self.selection.toggle(id);
    }

    pub fn set_selected(&mut self, id: T::Id, checked: bool) {
        self.selection.set(id, checked);
    }

    pub fn selection(&self) -> &Selection<T::Id> {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Все ли видимые строки выбраны (для чекбокса в заголовке)
    pub fn all_visible_selected(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|item| self.selection.contains(&item.id()))
    }

    /// Выбрать/снять все видимые строки
    pub fn set_all_visible(&mut self, checked: bool) {
        let ids: Vec<T::Id> = self.visible().iter().map(|item| item.id()).collect();
        for id in ids {
            self.selection.set(id, checked);
        }
    }

    /// Чекбокс в заголовке: если выбраны все видимые строки, снимает выбор,
    /// иначе выбирает все видимые
    pub fn toggle_all_visible(&mut self) {
        let checked = !self.all_visible_selected();
        self.set_all_visible(checked);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// ID выбранных записей в порядке списка
    pub fn selected_ids(&self) -> Vec<T::Id> {
        self.selected().iter().map(|item| item.id()).collect()
    }

    /// Выбранные записи в порядке списка
    pub fn selected(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.selection.contains(&item.id()))
            .collect()
    }

    // ------------------------------------------------------------------
    // Изменение записей
    // ------------------------------------------------------------------

    /// Заменяет запись с тем же ID или добавляет новую в начало списка.
    /// Возвращает `true`, если запись добавлена.
    pub fn upsert(&mut self, record: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(existing) => {
                *existing = record;
                false
            }
            None => {
                self.items.insert(0, record);
                true
            }
        }
    }

    pub fn update<R>(
        &mut self,
        id: T::Id,
        change: impl FnOnce(&mut T) -> R,
    ) -> Result<R, RecordError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .map(change)
            .ok_or_else(|| RecordError::NotFound(id.as_string()))
    }

    pub fn remove(&mut self, id: T::Id) -> Result<T, RecordError> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| RecordError::NotFound(id.as_string()))?;
        self.selection.set(id, false);
        Ok(self.items.remove(pos))
    }

    /// Удаляет выбранные записи, возвращает количество удалённых
    pub fn remove_selected(&mut self) -> usize {
        let before = self.items.len();
        let selection = &self.selection;
        self.items.retain(|item| !selection.contains(&item.id()));
        self.selection.clear();
        let removed = before - self.items.len();
        log::info!("{}: removed {} record(s)", T::full_name(), removed);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[derive(Debug, Clone)]
    struct Row {
        id: Uuid,
        code: String,
    }

    impl AggregateRoot for Row {
        type Id = Uuid;
        fn id(&self) -> Uuid {
            self.id
        }
        fn code(&self) -> &str {
            &self.code
        }
        fn aggregate_index() -> &'static str {
            "a999"
        }
        fn collection_name() -> &'static str {
            "row"
        }
        fn element_name() -> &'static str {
            "Row"
        }
        fn list_name() -> &'static str {
            "Rows"
        }
    }

    #[derive(Debug, Clone, Default)]
    struct CodeFilter {
        query: String,
    }

    impl ListFilter<Row> for CodeFilter {
        fn matches(&self, item: &Row) -> bool {
            contains_ci(&item.code, &self.query)
        }
        fn active_count(&self) -> usize {
            usize::from(!self.query.trim().is_empty())
        }
    }

    fn row(n: u128, code: &str) -> Row {
        Row {
            id: Uuid::from_u128(n),
            code: code.to_string(),
        }
    }

    fn page() -> ListPage<Row, CodeFilter> {
        ListPage::new(vec![row(1, "ALPHA"), row(2, "beta"), row(3, "Alpine")])
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Shanghai Port", "port"));
        assert!(contains_ci("anything", "   "));
        assert!(!contains_ci("DHL", "fedex"));
    }

    #[test]
    fn test_filter_and_active_count() {
        let mut p = page();
        assert_eq!(p.visible().len(), 3);
        p.update_filter(|f| f.query = "alp".into());
        let codes: Vec<&str> = p.visible().iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["ALPHA", "Alpine"]);
        assert_eq!(p.active_filters_count(), 1);
        p.reset_filter();
        assert_eq!(p.active_filters_count(), 0);
    }

    #[test]
    fn test_select_all_only_touches_visible_rows() {
        let mut p = page();
        p.update_filter(|f| f.query = "beta".into());
        p.set_all_visible(true);
        assert!(p.all_visible_selected());
        assert_eq!(p.selected_count(), 1);
        assert!(p.is_selected(Uuid::from_u128(2)));
        p.set_all_visible(false);
        assert_eq!(p.selected_count(), 0);
    }

    #[test]
    fn test_toggle_all_visible_flips() {
        let mut p = page();
        p.toggle(Uuid::from_u128(2));
        p.toggle_all_visible();
        assert_eq!(p.selected_count(), 3);
        p.toggle_all_visible();
        assert_eq!(p.selected_count(), 0);
        p.set_filter(CodeFilter { query: "zzz".into() });
        p.toggle_all_visible();
        assert_eq!(p.selected_count(), 0);
    }

    #[test]
    fn test_remove_selected() {
        let mut p = page();
        p.toggle(Uuid::from_u128(1));
        p.toggle(Uuid::from_u128(3));
        assert_eq!(p.remove_selected(), 2);
        assert_eq!(p.len(), 1);
        assert_eq!(p.selected_count(), 0);
    }

    #[test]
    fn test_upsert_replaces_or_prepends() {
        let mut p = page();
        assert!(!p.upsert(row(2, "BETA-2")));
        assert_eq!(p.get(Uuid::from_u128(2)).unwrap().code(), "BETA-2");
        assert!(p.upsert(row(4, "new")));
        assert_eq!(p.items()[0].code(), "new");
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let mut p = page();
        let missing = Uuid::from_u128(99);
        assert!(matches!(p.update(missing, |_| ()), Err(RecordError::NotFound(_))));
        assert!(p.remove(missing).is_err());
        assert!(p.remove(Uuid::from_u128(1)).is_ok());
        assert_eq!(p.len(), 2);
    }
}
