use crate::shared::list_utils::pick_by_code;
use contracts::domain::a007_payable_bill::aggregate::{
    PayableBill, PayableBillFilter, PayableStatus,
};
use contracts::domain::a007_payable_bill::seed::seed_payable_bills;
use contracts::shared::format::parse_date;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PayableBillListState {
    pub page: RwSignal<ListPage<PayableBill, PayableBillFilter>>,
    pub query: RwSignal<String>,
    pub status: RwSignal<String>,
    /// yyyy-mm-dd из `<input type="date">`
    pub bill_date: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub confirm_delete_open: RwSignal<bool>,
}

impl PayableBillListState {
    pub fn reset(&self) {
        self.query.set(String::new());
        self.status.set(String::new());
        self.bill_date.set(String::new());
        self.page.update(|p| p.reset_filter());
    }
}

pub fn build_filter(query: &str, status: &str, bill_date: &str) -> PayableBillFilter {
    PayableBillFilter {
        query: query.trim().to_string(),
        status: pick_by_code(PayableStatus::all(), status, |s| s.code()),
        bill_date: parse_date(bill_date),
    }
}

pub fn create_state() -> PayableBillListState {
    PayableBillListState {
        page: RwSignal::new(ListPage::new(seed_payable_bills())),
        query: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        bill_date: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
        confirm_delete_open: RwSignal::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_filter_parses_bill_date() {
        let f = build_filter("AP", "PAID", "2025-01-15");
        assert_eq!(f.status, Some(PayableStatus::Paid));
        assert_eq!(f.bill_date, NaiveDate::from_ymd_opt(2025, 1, 15));

        // незаполненная или неполная дата не фильтрует
        assert_eq!(build_filter("", "", "2025-01").bill_date, None);
    }
}
