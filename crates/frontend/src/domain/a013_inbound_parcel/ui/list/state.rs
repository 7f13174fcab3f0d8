use crate::shared::list_utils::{non_empty, pick_by_code};
use contracts::domain::a013_inbound_parcel::aggregate::{
    InboundParcel, InboundParcelFilter, InboundStatus,
};
use contracts::domain::a013_inbound_parcel::seed::seed_inbound_parcels;
use contracts::enums::WarehouseKind;
use contracts::shared::format::parse_date;
use contracts::shared::list::ListPage;
use leptos::prelude::*;

/// Поля формы фильтра; применяются кнопкой "查询"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundFilterInput {
    pub tracking_no: String,
    pub customer: String,
    pub inbound_date: String,
    pub status: String,
    /// "YES" / "NO" / ""
    pub unpacked: String,
    pub destination: String,
}

impl InboundFilterInput {
    pub fn to_filter(&self, kind: WarehouseKind) -> InboundParcelFilter {
        InboundParcelFilter {
            kind,
            tracking_no: self.tracking_no.trim().to_string(),
            customer: self.customer.trim().to_string(),
            inbound_date: parse_date(&self.inbound_date),
            status: pick_by_code(InboundStatus::all(), &self.status, |s| s.code()),
            unpacked: match self.unpacked.as_str() {
                "YES" => Some(true),
                "NO" => Some(false),
                _ => None,
            },
            destination: non_empty(&self.destination),
        }
    }
}

#[derive(Clone, Copy)]
pub struct InboundParcelListState {
    pub page: RwSignal<ListPage<InboundParcel, InboundParcelFilter>>,
    /// Код вкладки склада (`WarehouseKind::code`)
    pub kind: RwSignal<String>,
    pub tracking_no: RwSignal<String>,
    pub customer: RwSignal<String>,
    pub inbound_date: RwSignal<String>,
    pub status: RwSignal<String>,
    pub unpacked: RwSignal<String>,
    pub destination: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
}

impl InboundParcelListState {
    pub fn current_kind(&self) -> WarehouseKind {
        pick_by_code(WarehouseKind::all(), &self.kind.get_untracked(), |k| k.code())
            .unwrap_or_default()
    }

    fn input(&self) -> InboundFilterInput {
        InboundFilterInput {
            tracking_no: self.tracking_no.get_untracked(),
            customer: self.customer.get_untracked(),
            inbound_date: self.inbound_date.get_untracked(),
            status: self.status.get_untracked(),
            unpacked: self.unpacked.get_untracked(),
            destination: self.destination.get_untracked(),
        }
    }

    pub fn search(&self) {
        let filter = self.input().to_filter(self.current_kind());
        self.page.update(|p| p.set_filter(filter));
    }

    /// Переключение вкладки: прочие условия сохраняются, выбор сбрасывается
    pub fn switch_kind(&self) {
        let kind = self.current_kind();
        self.page.update(|p| {
            p.update_filter(|f| f.kind = kind);
            p.clear_selection();
        });
    }

    pub fn reset(&self) {
        self.tracking_no.set(String::new());
        self.customer.set(String::new());
        self.inbound_date.set(String::new());
        self.status.set(String::new());
        self.unpacked.set(String::new());
        self.destination.set(String::new());
        let kind = self.current_kind();
        self.page.update(|p| {
            p.set_filter(InboundParcelFilter {
                kind,
                ..Default::default()
            })
        });
    }
}

pub fn create_state() -> InboundParcelListState {
    InboundParcelListState {
        page: RwSignal::new(ListPage::new(seed_inbound_parcels())),
        kind: RwSignal::new(WarehouseKind::Front.code().to_string()),
        tracking_no: RwSignal::new(String::new()),
        customer: RwSignal::new(String::new()),
        inbound_date: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        unpacked: RwSignal::new(String::new()),
        destination: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_input_to_filter() {
        let input = InboundFilterInput {
            tracking_no: " SF14 ".into(),
            inbound_date: "2026-02-05".into(),
            unpacked: "NO".into(),
            destination: "HKG".into(),
            ..Default::default()
        };
        let f = input.to_filter(WarehouseKind::Forwarder);
        assert_eq!(f.kind, WarehouseKind::Forwarder);
        assert_eq!(f.tracking_no, "SF14");
        assert_eq!(f.inbound_date, NaiveDate::from_ymd_opt(2026, 2, 5));
        assert_eq!(f.unpacked, Some(false));
        assert_eq!(f.destination.as_deref(), Some("HKG"));
        assert_eq!(f.status, None);
    }

    #[test]
    fn test_blank_input_keeps_only_kind() {
        let f = InboundFilterInput::default().to_filter(WarehouseKind::Front);
        assert_eq!(
            f,
            InboundParcelFilter {
                kind: WarehouseKind::Front,
                ..Default::default()
            }
        );
    }
}
