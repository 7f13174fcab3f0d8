use crate::shared::list_utils::{non_empty, pick_by_code};
use contracts::domain::a014_outbound_batch::aggregate::{
    OutboundBatch, OutboundBatchFilter, OutboundStatus,
};
use contracts::domain::a014_outbound_batch::seed::seed_outbound_batches;
use contracts::enums::WarehouseKind;
use contracts::shared::format::parse_date;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

/// Поля формы фильтра; применяются кнопкой "查询"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutboundFilterInput {
    pub batch_no: String,
    pub supplier_tracking_no: String,
    pub destination: String,
    pub status: String,
    pub outbound_from: String,
    pub outbound_to: String,
}

impl OutboundFilterInput {
    pub fn to_filter(&self, kind: WarehouseKind) -> OutboundBatchFilter {
        OutboundBatchFilter {
            kind,
            batch_no: self.batch_no.trim().to_string(),
            supplier_tracking_no: self.supplier_tracking_no.trim().to_string(),
            destination: non_empty(&self.destination),
            status: pick_by_code(OutboundStatus::all(), &self.status, |s| s.code()),
            outbound_from: parse_date(&self.outbound_from),
            outbound_to: parse_date(&self.outbound_to),
        }
    }
}

#[derive(Clone, Copy)]
pub struct OutboundBatchListState {
    pub page: RwSignal<ListPage<OutboundBatch, OutboundBatchFilter>>,
    pub kind: RwSignal<String>,
    pub batch_no: RwSignal<String>,
    pub supplier_tracking_no: RwSignal<String>,
    pub destination: RwSignal<String>,
    pub status: RwSignal<String>,
    pub outbound_from: RwSignal<String>,
    pub outbound_to: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl OutboundBatchListState {
    pub fn current_kind(&self) -> WarehouseKind {
        pick_by_code(WarehouseKind::all(), &self.kind.get_untracked(), |k| k.code())
            .unwrap_or_default()
    }

    fn input(&self) -> OutboundFilterInput {
        OutboundFilterInput {
            batch_no: self.batch_no.get_untracked(),
            supplier_tracking_no: self.supplier_tracking_no.get_untracked(),
            destination: self.destination.get_untracked(),
            status: self.status.get_untracked(),
            outbound_from: self.outbound_from.get_untracked(),
            outbound_to: self.outbound_to.get_untracked(),
        }
    }

    pub fn search(&self) {
        let filter = self.input().to_filter(self.current_kind());
        self.page.update(|p| p.set_filter(filter));
    }

    pub fn switch_kind(&self) {
        let kind = self.current_kind();
        self.page.update(|p| {
            p.update_filter(|f| f.kind = kind);
            p.clear_selection();
        });
    }

    pub fn reset(&self) {
        self.batch_no.set(String::new());
        self.supplier_tracking_no.set(String::new());
        self.destination.set(String::new());
        self.status.set(String::new());
        self.outbound_from.set(String::new());
        self.outbound_to.set(String::new());
        let kind = self.current_kind();
        self.page.update(|p| {
            p.set_filter(OutboundBatchFilter {
                kind,
                ..Default::default()
            })
        });
    }
}

pub fn create_state() -> OutboundBatchListState {
    OutboundBatchListState {
        page: RwSignal::new(ListPage::new(seed_outbound_batches())),
        kind: RwSignal::new(WarehouseKind::Front.code().to_string()),
        batch_no: RwSignal::new(String::new()),
        supplier_tracking_no: RwSignal::new(String::new()),
        destination: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        outbound_from: RwSignal::new(String::new()),
        outbound_to: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_input_to_filter_date_range() {
        let input = OutboundFilterInput {
            outbound_from: "2026-02-01".into(),
            outbound_to: "2026-02-28".into(),
            status: "TRANSPORTING".into(),
            ..Default::default()
        };
        let f = input.to_filter(WarehouseKind::Forwarder);
        assert_eq!(f.kind, WarehouseKind::Forwarder);
        assert_eq!(f.outbound_from, NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(f.outbound_to, NaiveDate::from_ymd_opt(2026, 2, 28));
        assert_eq!(f.status, Some(OutboundStatus::Transporting));
        assert_eq!(f.destination, None);
    }
}
