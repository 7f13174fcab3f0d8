//! Вкладки:
//! - `page` - компонент TabPage для обёртки контента вкладки
//! - `registry` - маппинг ключа вкладки на страницу

pub mod page;
pub mod registry;

pub use page::TabPage;
