use crate::shared::list_utils::pick_by_code;
use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierFilter, SupplierType};
use contracts::domain::a003_supplier::seed::seed_suppliers;
use contracts::enums::RecordStatus;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SupplierListState {
    pub page: RwSignal<ListPage<Supplier, SupplierFilter>>,
    pub name: RwSignal<String>,
    pub supplier_type: RwSignal<String>,
    pub status: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl SupplierListState {
    pub fn reset(&self) {
        self.name.set(String::new());
        self.supplier_type.set(String::new());
        self.status.set(String::new());
        self.page.update(|p| p.reset_filter());
    }
}

pub fn build_filter(name: &str, supplier_type: &str, status: &str) -> SupplierFilter {
    SupplierFilter {
        name: name.trim().to_string(),
        supplier_type: pick_by_code(SupplierType::all(), supplier_type, |t| t.code()),
        status: pick_by_code(RecordStatus::all(), status, |s| s.code()),
    }
}

pub fn create_state() -> SupplierListState {
    SupplierListState {
        page: RwSignal::new(ListPage::new(seed_suppliers())),
        name: RwSignal::new(String::new()),
        supplier_type: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_reads_select_codes() {
        let f = build_filter("顺丰", "CUSTOMS", "INACTIVE");
        assert_eq!(f.name, "顺丰");
        assert_eq!(f.supplier_type, Some(SupplierType::Customs));
        assert_eq!(f.status, Some(RecordStatus::Inactive));
        assert_eq!(build_filter("", "", ""), SupplierFilter::default());
    }
}
