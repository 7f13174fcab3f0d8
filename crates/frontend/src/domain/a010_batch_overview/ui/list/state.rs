use crate::shared::list_utils::{non_empty, pick_by_code};
use contracts::domain::a010_batch_overview::aggregate::{
    BatchOverview, BatchOverviewFilter, BatchStatus,
};
use contracts::domain::a010_batch_overview::seed::seed_batches;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BatchOverviewListState {
    pub page: RwSignal<ListPage<BatchOverview, BatchOverviewFilter>>,
    pub batch_no: RwSignal<String>,
    pub status: RwSignal<String>,
    pub final_country: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl BatchOverviewListState {
    pub fn reset(&self) {
        self.batch_no.set(String::new());
        self.status.set(String::new());
        self.final_country.set(String::new());
        self.page.update(|p| p.reset_filter());
    }

    pub fn country_options(&self) -> Vec<String> {
        self.page.with_untracked(|p| {
            let mut countries: Vec<String> =
                p.items().iter().map(|b| b.final_country.clone()).collect();
            countries.sort();
            countries.dedup();
            countries
        })
    }
}

pub fn build_filter(batch_no: &str, status: &str, final_country: &str) -> BatchOverviewFilter {
    BatchOverviewFilter {
        batch_no: batch_no.trim().to_string(),
        status: pick_by_code(BatchStatus::all(), status, |s| s.code()),
        final_country: non_empty(final_country),
    }
}

pub fn create_state() -> BatchOverviewListState {
    BatchOverviewListState {
        page: RwSignal::new(ListPage::new(seed_batches())),
        batch_no: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        final_country: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        let f = build_filter(" B2025 ", "TRANSIT", "");
        assert_eq!(f.batch_no, "B2025");
        assert_eq!(f.status, Some(BatchStatus::Transit));
        assert_eq!(f.final_country, None);
    }
}
