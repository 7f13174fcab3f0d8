use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор заявки на забор груза
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionOrderId(pub Uuid);

impl CollectionOrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for CollectionOrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CollectionOrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionStatus {
    Pending,
    Collected,
    Cancelled,
}

impl CollectionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CollectionStatus::Pending => "PENDING",
            CollectionStatus::Collected => "COLLECTED",
            CollectionStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CollectionStatus::Pending => "待揽收",
            CollectionStatus::Collected => "已揽收",
            CollectionStatus::Cancelled => "已取消",
        }
    }

    pub fn all() -> Vec<CollectionStatus> {
        vec![
            CollectionStatus::Pending,
            CollectionStatus::Collected,
            CollectionStatus::Cancelled,
        ]
    }
}

/// Заявка на забор груза у отправителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOrder {
    pub id: CollectionOrderId,
    pub logistics_order_no: String,
    pub consignor_id: String,
    pub supplier_id: String,
    pub express_no: String,
    pub create_time: NaiveDateTime,
    pub status: CollectionStatus,
    pub final_country: String,
}

impl AggregateRoot for CollectionOrder {
    type Id = CollectionOrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.express_no
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "collection_order"
    }

    fn element_name() -> &'static str {
        "揽收单"
    }

    fn list_name() -> &'static str {
        "物流揽收单"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionOrderFilter {
    /// Поиск по номеру экспресс-отправления или логистического заказа
    pub query: String,
    pub status: Option<CollectionStatus>,
    pub final_country: Option<String>,
}

impl ListFilter<CollectionOrder> for CollectionOrderFilter {
    fn matches(&self, item: &CollectionOrder) -> bool {
        (contains_ci(&item.express_no, &self.query) || contains_ci(&item.logistics_order_no, &self.query))
            && self.status.map_or(true, |s| item.status == s)
            && self.final_country.as_ref().map_or(true, |c| &item.final_country == c)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.query.trim().is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.final_country.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_collection_order::seed::seed_collection_orders;

    #[test]
    fn test_search_by_express_or_order_no() {
        let orders = seed_collection_orders();
        let by_express = CollectionOrderFilter {
            query: "yt9876".into(),
            ..Default::default()
        };
        assert_eq!(orders.iter().filter(|o| by_express.matches(o)).count(), 1);

        let by_order = CollectionOrderFilter {
            query: "L20250201".into(),
            final_country: Some("US".into()),
            ..Default::default()
        };
        assert_eq!(orders.iter().filter(|o| by_order.matches(o)).count(), 2);
    }
}
