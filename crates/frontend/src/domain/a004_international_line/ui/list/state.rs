use crate::shared::list_utils::{non_empty, pick_by_code};
use contracts::domain::a004_international_line::aggregate::{
    InternationalLine, InternationalLineFilter,
};
use contracts::domain::a004_international_line::seed::seed_lines;
use contracts::enums::RecordStatus;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InternationalLineListState {
    pub page: RwSignal<ListPage<InternationalLine, InternationalLineFilter>>,
    pub query: RwSignal<String>,
    pub country: RwSignal<String>,
    pub status: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl InternationalLineListState {
    pub fn reset(&self) {
        self.query.set(String::new());
        self.country.set(String::new());
        self.status.set(String::new());
        self.page.update(|p| p.reset_filter());
    }

    pub fn country_options(&self) -> Vec<String> {
        self.page.with_untracked(|p| {
            let mut countries: Vec<String> = p
                .items()
                .iter()
                .map(|line| line.destination_country.clone())
                .collect();
            countries.sort();
            countries.dedup();
            countries
        })
    }
}

pub fn build_filter(query: &str, country: &str, status: &str) -> InternationalLineFilter {
    InternationalLineFilter {
        query: query.trim().to_string(),
        destination_country: non_empty(country),
        status: pick_by_code(RecordStatus::all(), status, |s| s.code()),
    }
}

pub fn create_state() -> InternationalLineListState {
    InternationalLineListState {
        page: RwSignal::new(ListPage::new(seed_lines())),
        query: RwSignal::new(String::new()),
        country: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        let f = build_filter("CN-US", " ", "ACTIVE");
        assert_eq!(f.query, "CN-US");
        assert_eq!(f.destination_country, None);
        assert_eq!(f.status, Some(RecordStatus::Active));
    }
}
