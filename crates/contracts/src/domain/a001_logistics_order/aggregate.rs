use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор международного логистического заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogisticsOrderId(pub Uuid);

impl LogisticsOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for LogisticsOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LogisticsOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Статусы и справочные значения
// ============================================================================

/// Статус заказа.
///
/// Прямой путь: PENDING_PICKUP → OVERSEAS_WAREHOUSE → LAST_MILE_DELIVERY →
/// COMPLETED; отмена возможна только из PENDING_PICKUP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingPickup,
    OverseasWarehouse,
    LastMileDelivery,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::PendingPickup => "PENDING_PICKUP",
            OrderStatus::OverseasWarehouse => "OVERSEAS_WAREHOUSE",
            OrderStatus::LastMileDelivery => "LAST_MILE_DELIVERY",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::PendingPickup => "待揽收",
            OrderStatus::OverseasWarehouse => "境外仓",
            OrderStatus::LastMileDelivery => "末端派送中",
            OrderStatus::Completed => "完成",
            OrderStatus::Cancelled => "已取消",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::PendingPickup,
            OrderStatus::OverseasWarehouse,
            OrderStatus::LastMileDelivery,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Result<Self, String> {
        Self::all()
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or_else(|| format!("Unknown order status: {}", code))
    }
}

/// Канал доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Внутренний приоритетный канал "光锥"
    Lightcone,
    Other,
}

impl Channel {
    pub fn code(&self) -> &'static str {
        match self {
            Channel::Lightcone => "Lightcone",
            Channel::Other => "Other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Lightcone => "光锥",
            Channel::Other => "其他",
        }
    }
}

/// Статус передачи заказа во внешнюю WMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WmsSyncStatus {
    Pending,
    Synced,
    Failed,
}

impl WmsSyncStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WmsSyncStatus::Pending => "PENDING",
            WmsSyncStatus::Synced => "SYNCED",
            WmsSyncStatus::Failed => "FAILED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WmsSyncStatus::Pending => "待同步",
            WmsSyncStatus::Synced => "已同步",
            WmsSyncStatus::Failed => "失败",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Международный логистический заказ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsOrder {
    pub id: LogisticsOrderId,
    pub order_no: String,
    pub status: OrderStatus,
    pub customer_name: String,
    pub destination: String,
    pub create_time: NaiveDateTime,
    /// Сумма в USD
    pub amount: f64,
    pub channel: Channel,
    pub wms_sync_status: WmsSyncStatus,
}

impl AggregateRoot for LogisticsOrder {
    type Id = LogisticsOrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.order_no
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "logistics_order"
    }

    fn element_name() -> &'static str {
        "国际物流订单"
    }

    fn list_name() -> &'static str {
        "国际物流订单"
    }
}

// ============================================================================
// Фильтр списка
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogisticsOrderFilter {
    /// Поиск по номеру заказа или клиенту
    pub query: String,
    pub status: Option<OrderStatus>,
}

impl ListFilter<LogisticsOrder> for LogisticsOrderFilter {
    fn matches(&self, item: &LogisticsOrder) -> bool {
        let by_query =
            contains_ci(&item.order_no, &self.query) || contains_ci(&item.customer_name, &self.query);
        let by_status = self.status.map_or(true, |s| item.status == s);
        by_query && by_status
    }

    fn active_count(&self) -> usize {
        usize::from(!self.query.trim().is_empty()) + usize::from(self.status.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = OrderStatus::all()
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![OrderStatus::Completed, OrderStatus::Cancelled]);
    }

    #[test]
    fn test_status_codes_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Ok(status));
        }
        assert!(OrderStatus::from_code("SHIPPED").is_err());
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&OrderStatus::LastMileDelivery).unwrap();
        assert_eq!(json, "\"LAST_MILE_DELIVERY\"");
    }

    #[test]
    fn test_filter_matches_order_no_or_customer() {
        let orders = crate::domain::a001_logistics_order::seed::seed_orders();
        let filter = LogisticsOrderFilter {
            query: "globex".into(),
            status: None,
        };
        let hits: Vec<_> = orders.iter().filter(|o| filter.matches(o)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].order_no, "M20250120002");

        let filter = LogisticsOrderFilter {
            query: "M2025".into(),
            status: Some(OrderStatus::PendingPickup),
        };
        assert_eq!(orders.iter().filter(|o| filter.matches(o)).count(), 2);
        assert_eq!(filter.active_count(), 2);
    }
}
