use contracts::shared::navigation::{route_for_path, PageKey};
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Открывает страницу по текущему пути адресной строки и дальше
    /// синхронизирует путь с активной вкладкой
    pub fn init_router_integration(&self) {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        self.open_page(route_for_path(&path));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let Some(page) = PageKey::from_key(&active_key) else {
                return;
            };
            let new_path = page.path();

            let current_path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();

            if current_path != new_path {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(new_path),
                        );
                    }
                }
            }
        });
    }

    pub fn open_page(&self, page: PageKey) {
        self.open_tab(page.key(), page.title());
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
                pinned: key == PageKey::Dashboard.key(),
            };
            self.opened.update(|tabs| {
                tabs.push(tab);
                leptos::logging::log!("tab added, total tabs: {}", tabs.len());
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| {
            tabs.retain(|tab| tab.key != key || tab.pinned);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    /// Закреплённую вкладку (дашборд) закрыть нельзя
    pub pinned: bool,
}
