use crate::shared::list_utils::{non_empty, pick_by_code};
use contracts::domain::a009_collection_order::aggregate::{
    CollectionOrder, CollectionOrderFilter, CollectionStatus,
};
use contracts::domain::a009_collection_order::seed::seed_collection_orders;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CollectionOrderListState {
    pub page: RwSignal<ListPage<CollectionOrder, CollectionOrderFilter>>,
    pub query: RwSignal<String>,
    pub status: RwSignal<String>,
    pub final_country: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub confirm_delete_open: RwSignal<bool>,
}

impl CollectionOrderListState {
    pub fn reset(&self) {
        self.query.set(String::new());
        self.status.set(String::new());
        self.final_country.set(String::new());
        self.page.update(|p| p.reset_filter());
    }

    pub fn country_options(&self) -> Vec<String> {
        self.page.with_untracked(|p| {
            let mut countries: Vec<String> =
                p.items().iter().map(|o| o.final_country.clone()).collect();
            countries.sort();
            countries.dedup();
            countries
        })
    }
}

pub fn build_filter(query: &str, status: &str, final_country: &str) -> CollectionOrderFilter {
    CollectionOrderFilter {
        query: query.trim().to_string(),
        status: pick_by_code(CollectionStatus::all(), status, |s| s.code()),
        final_country: non_empty(final_country),
    }
}

pub fn create_state() -> CollectionOrderListState {
    CollectionOrderListState {
        page: RwSignal::new(ListPage::new(seed_collection_orders())),
        query: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        final_country: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
        confirm_delete_open: RwSignal::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        let f = build_filter("SF", "COLLECTED", "US");
        assert_eq!(f.query, "SF");
        assert_eq!(f.status, Some(CollectionStatus::Collected));
        assert_eq!(f.final_country.as_deref(), Some("US"));
    }
}
