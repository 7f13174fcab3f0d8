//! Категории страниц внутри вкладок.
//!
//! Каждая страница объявляет HTML `id` вида `{entity}--{category}`
//! (например `"a005_port--list"`) и `data-page-category` из констант ниже.
//! По части до `--` страница находится в каталоге `domain/{entity}/`.

/// Список записей: фильтры и таблица
pub const PAGE_CAT_LIST: &str = "list";

/// Аналитический обзор
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
