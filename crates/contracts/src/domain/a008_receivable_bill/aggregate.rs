use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::Currency;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор счёта к получению
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceivableBillId(pub Uuid);

impl ReceivableBillId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for ReceivableBillId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReceivableBillId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceivableStatus {
    Unpaid,
    Received,
    Overdue,
}

impl ReceivableStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ReceivableStatus::Unpaid => "UNPAID",
            ReceivableStatus::Received => "RECEIVED",
            ReceivableStatus::Overdue => "OVERDUE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReceivableStatus::Unpaid => "待收款",
            ReceivableStatus::Received => "已收款",
            ReceivableStatus::Overdue => "已逾期",
        }
    }

    pub fn all() -> Vec<ReceivableStatus> {
        vec![ReceivableStatus::Unpaid, ReceivableStatus::Received, ReceivableStatus::Overdue]
    }
}

/// Счёт клиенту к получению
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivableBill {
    pub id: ReceivableBillId,
    pub bill_no: String,
    pub customer_name: String,
    pub amount: f64,
    pub currency: Currency,
    pub status: ReceivableStatus,
    pub create_time: NaiveDate,
    pub due_date: NaiveDate,
}

impl AggregateRoot for ReceivableBill {
    type Id = ReceivableBillId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.bill_no
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "receivable_bill"
    }

    fn element_name() -> &'static str {
        "应收账单"
    }

    fn list_name() -> &'static str {
        "客户应收账单"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceivableBillFilter {
    /// Поиск по номеру счёта или клиенту
    pub query: String,
    pub status: Option<ReceivableStatus>,
    pub bill_date: Option<NaiveDate>,
}

impl ListFilter<ReceivableBill> for ReceivableBillFilter {
    fn matches(&self, item: &ReceivableBill) -> bool {
        (contains_ci(&item.bill_no, &self.query) || contains_ci(&item.customer_name, &self.query))
            && self.status.map_or(true, |s| item.status == s)
            && self.bill_date.map_or(true, |d| item.create_time == d)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.query.trim().is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.bill_date.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_receivable_bill::seed::seed_receivable_bills;

    #[test]
    fn test_search_by_customer_and_status() {
        let bills = seed_receivable_bills();
        let filter = ReceivableBillFilter {
            query: "acme".into(),
            status: Some(ReceivableStatus::Received),
            ..Default::default()
        };
        let hits: Vec<_> = bills.iter().filter(|b| filter.matches(b)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].bill_no, "RB20250115005");
    }
}
