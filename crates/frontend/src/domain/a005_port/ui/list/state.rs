use crate::shared::list_utils::{non_empty, pick_by_code};
use contracts::domain::a005_port::aggregate::{Port, PortFilter, PortType};
use contracts::domain::a005_port::seed::seed_ports;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PortListState {
    pub page: RwSignal<ListPage<Port, PortFilter>>,
    pub query: RwSignal<String>,
    pub port_type: RwSignal<String>,
    pub country: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl PortListState {
    pub fn reset(&self) {
        self.query.set(String::new());
        self.port_type.set(String::new());
        self.country.set(String::new());
        self.page.update(|p| p.reset_filter());
    }

    /// Страны, встречающиеся в справочнике, для выпадающего списка
    pub fn country_options(&self) -> Vec<String> {
        self.page.with_untracked(|p| {
            let mut countries: Vec<String> = p.items().iter().map(|port| port.country.clone()).collect();
            countries.sort();
            countries.dedup();
            countries
        })
    }
}

pub fn build_filter(query: &str, port_type: &str, country: &str) -> PortFilter {
    PortFilter {
        query: query.trim().to_string(),
        port_type: pick_by_code(PortType::all(), port_type, |t| t.code()),
        country: non_empty(country),
    }
}

pub fn create_state() -> PortListState {
    PortListState {
        page: RwSignal::new(ListPage::new(seed_ports())),
        query: RwSignal::new(String::new()),
        port_type: RwSignal::new(String::new()),
        country: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        let f = build_filter(" pvg ", "AIR", "");
        assert_eq!(f.query, "pvg");
        assert_eq!(f.port_type, Some(PortType::Air));
        assert_eq!(f.country, None);

        let f = build_filter("", "", "CN");
        assert_eq!(f.port_type, None);
        assert_eq!(f.country.as_deref(), Some("CN"));
    }
}
