use crate::shared::list_utils::pick_by_code;
use contracts::domain::a006_exchange_rate::aggregate::{ExchangeRate, ExchangeRateFilter};
use contracts::domain::a006_exchange_rate::seed::seed_rates;
use contracts::enums::Currency;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ExchangeRateListState {
    pub page: RwSignal<ListPage<ExchangeRate, ExchangeRateFilter>>,
    pub source_currency: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub confirm_delete_open: RwSignal<bool>,
}

impl ExchangeRateListState {
    pub fn reset(&self) {
        self.source_currency.set(String::new());
        self.page.update(|p| p.reset_filter());
    }
}

pub fn build_filter(source_currency: &str) -> ExchangeRateFilter {
    ExchangeRateFilter {
        source_currency: pick_by_code(Currency::all(), source_currency, |c| c.code()),
    }
}

pub fn create_state() -> ExchangeRateListState {
    ExchangeRateListState {
        page: RwSignal::new(ListPage::new(seed_rates())),
        source_currency: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
        confirm_delete_open: RwSignal::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        assert_eq!(build_filter("EUR").source_currency, Some(Currency::Eur));
        assert_eq!(build_filter("").source_currency, None);
        assert_eq!(build_filter("XXX").source_currency, None);
    }
}
