use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::WarehouseKind;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор входящей посылки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InboundParcelId(pub Uuid);

impl InboundParcelId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for InboundParcelId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InboundParcelId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InboundStatus {
    Inbound,
    Outbound,
}

impl InboundStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InboundStatus::Inbound => "INBOUND",
            InboundStatus::Outbound => "OUTBOUND",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InboundStatus::Inbound => "已入库",
            InboundStatus::Outbound => "已出库",
        }
    }

    pub fn all() -> Vec<InboundStatus> {
        vec![InboundStatus::Inbound, InboundStatus::Outbound]
    }
}

/// Посылка, принятая на склад
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundParcel {
    pub id: InboundParcelId,
    pub warehouse_kind: WarehouseKind,
    /// Источник посылки ("B端" и т.п.)
    pub source: String,
    pub customer_name: String,
    pub customer_code: String,
    pub tracking_no: String,
    /// Вес при приёмке, кг
    pub weight: f64,
    pub status: InboundStatus,
    pub warehouse_name: String,
    pub route: String,
    pub address: String,
    pub contact: String,
    pub phone: String,
    pub is_unpacked: bool,
    pub inbound_time: NaiveDateTime,
    /// Код направления (HKG, USA, ...)
    pub destination: String,
}

impl AggregateRoot for InboundParcel {
    type Id = InboundParcelId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.tracking_no
    }

    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn collection_name() -> &'static str {
        "inbound_parcel"
    }

    fn element_name() -> &'static str {
        "入库包裹"
    }

    fn list_name() -> &'static str {
        "入库管理"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundParcelFilter {
    /// Текущая вкладка
    pub kind: WarehouseKind,
    pub tracking_no: String,
    pub customer: String,
    pub inbound_date: Option<NaiveDate>,
    pub status: Option<InboundStatus>,
    pub unpacked: Option<bool>,
    pub destination: Option<String>,
}

impl ListFilter<InboundParcel> for InboundParcelFilter {
    fn matches(&self, item: &InboundParcel) -> bool {
        item.warehouse_kind == self.kind
            && contains_ci(&item.tracking_no, &self.tracking_no)
            && (contains_ci(&item.customer_name, &self.customer)
                || contains_ci(&item.customer_code, &self.customer))
            && self.inbound_date.map_or(true, |d| item.inbound_time.date() == d)
            && self.status.map_or(true, |s| item.status == s)
            && self.unpacked.map_or(true, |u| item.is_unpacked == u)
            && self.destination.as_ref().map_or(true, |d| &item.destination == d)
    }

    /// Вкладка склада условием не считается
    fn active_count(&self) -> usize {
        usize::from(!self.tracking_no.trim().is_empty())
            + usize::from(!self.customer.trim().is_empty())
            + usize::from(self.inbound_date.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.unpacked.is_some())
            + usize::from(self.destination.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a013_inbound_parcel::seed::seed_inbound_parcels;
    use crate::shared::format::day;

    fn hits(filter: &InboundParcelFilter) -> Vec<String> {
        seed_inbound_parcels()
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.tracking_no)
            .collect()
    }

    #[test]
    fn test_tabs_split_by_warehouse_kind() {
        let front = InboundParcelFilter::default();
        let forwarder = InboundParcelFilter {
            kind: WarehouseKind::Forwarder,
            ..Default::default()
        };
        assert_eq!(hits(&front).len() + hits(&forwarder).len(), seed_inbound_parcels().len());
        assert_eq!(front.active_count(), 0);
        assert_eq!(forwarder.active_count(), 0);
    }

    #[test]
    fn test_tracking_customer_and_date() {
        let filter = InboundParcelFilter {
            kind: WarehouseKind::Forwarder,
            customer: "y8a3".into(),
            inbound_date: Some(day(2026, 2, 4)),
            ..Default::default()
        };
        assert_eq!(hits(&filter).len(), 3);

        let filter = InboundParcelFilter {
            kind: WarehouseKind::Forwarder,
            tracking_no: "7734".into(),
            ..Default::default()
        };
        assert_eq!(hits(&filter), vec!["773404127268477"]);
        assert_eq!(filter.active_count(), 1);
    }

    #[test]
    fn test_front_destination_filter() {
        let filter = InboundParcelFilter {
            destination: Some("USA".into()),
            ..Default::default()
        };
        assert_eq!(hits(&filter), vec!["1Z999AA10123456784"]);
    }
}
