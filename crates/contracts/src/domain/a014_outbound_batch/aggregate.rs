use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::WarehouseKind;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор партии отгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutboundBatchId(pub Uuid);

impl OutboundBatchId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for OutboundBatchId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OutboundBatchId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutboundStatus {
    Outbound,
    Transporting,
    Arrived,
}

impl OutboundStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OutboundStatus::Outbound => "OUTBOUND",
            OutboundStatus::Transporting => "TRANSPORTING",
            OutboundStatus::Arrived => "ARRIVED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OutboundStatus::Outbound => "已出库",
            OutboundStatus::Transporting => "跨境运输中",
            OutboundStatus::Arrived => "抵达目的地仓库",
        }
    }

    pub fn all() -> Vec<OutboundStatus> {
        vec![
            OutboundStatus::Outbound,
            OutboundStatus::Transporting,
            OutboundStatus::Arrived,
        ]
    }
}

/// Партия, отгруженная со склада
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundBatch {
    pub id: OutboundBatchId,
    pub warehouse_kind: WarehouseKind,
    pub batch_no: String,
    pub tracking_no: String,
    pub customer_count: u32,
    pub pallet_count: u32,
    pub box_count: u32,
    /// Вес при отгрузке, кг
    pub outbound_weight: f64,
    /// Округлённый (расчётный) вес, кг
    pub inbound_weight: f64,
    /// Объём, м³
    pub volume: f64,
    pub package_count: u32,
    pub total_value: f64,
    pub supplier_tracking_no: String,
    pub status: OutboundStatus,
    /// Код направления (HKG, ZAF, ...)
    pub destination: String,
    pub carrier: String,
    /// Все посылки партии успешно предзаявлены
    pub pre_report_success: bool,
    pub actual_outbound_time: NaiveDateTime,
    pub warehouse_name: String,
    pub route: String,
}

impl AggregateRoot for OutboundBatch {
    type Id = OutboundBatchId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.batch_no
    }

    fn aggregate_index() -> &'static str {
        "a014"
    }

    fn collection_name() -> &'static str {
        "outbound_batch"
    }

    fn element_name() -> &'static str {
        "出库批次"
    }

    fn list_name() -> &'static str {
        "出库管理"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutboundBatchFilter {
    pub kind: WarehouseKind,
    pub batch_no: String,
    pub supplier_tracking_no: String,
    pub destination: Option<String>,
    pub status: Option<OutboundStatus>,
    pub outbound_from: Option<NaiveDate>,
    pub outbound_to: Option<NaiveDate>,
}

impl ListFilter<OutboundBatch> for OutboundBatchFilter {
    fn matches(&self, item: &OutboundBatch) -> bool {
        let outbound = item.actual_outbound_time.date();
        item.warehouse_kind == self.kind
            && contains_ci(&item.batch_no, &self.batch_no)
            && contains_ci(&item.supplier_tracking_no, &self.supplier_tracking_no)
            && self.destination.as_ref().map_or(true, |d| &item.destination == d)
            && self.status.map_or(true, |s| item.status == s)
            && self.outbound_from.map_or(true, |from| outbound >= from)
            && self.outbound_to.map_or(true, |to| outbound <= to)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.batch_no.trim().is_empty())
            + usize::from(!self.supplier_tracking_no.trim().is_empty())
            + usize::from(self.destination.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.outbound_from.is_some() || self.outbound_to.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a014_outbound_batch::seed::seed_outbound_batches;
    use crate::shared::format::day;

    fn hits(filter: &OutboundBatchFilter) -> Vec<String> {
        seed_outbound_batches()
            .into_iter()
            .filter(|b| filter.matches(b))
            .map(|b| b.batch_no)
            .collect()
    }

    #[test]
    fn test_forwarder_tab_filters() {
        let filter = OutboundBatchFilter {
            kind: WarehouseKind::Forwarder,
            supplier_tracking_no: "za2026".into(),
            ..Default::default()
        };
        assert_eq!(hits(&filter), vec!["20260204_1"]);

        let filter = OutboundBatchFilter {
            kind: WarehouseKind::Forwarder,
            destination: Some("HKG".into()),
            ..Default::default()
        };
        assert_eq!(hits(&filter), vec!["20260204_2"]);
    }

    #[test]
    fn test_outbound_date_range() {
        let filter = OutboundBatchFilter {
            kind: WarehouseKind::Front,
            outbound_from: Some(day(2026, 2, 5)),
            outbound_to: Some(day(2026, 2, 6)),
            ..Default::default()
        };
        assert_eq!(hits(&filter), vec!["20260205_1"]);
        assert_eq!(filter.active_count(), 1);
    }
}
