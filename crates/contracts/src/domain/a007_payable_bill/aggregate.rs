use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::Currency;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор счёта к оплате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayableBillId(pub Uuid);

impl PayableBillId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for PayableBillId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PayableBillId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayableStatus {
    Pending,
    Paid,
    Partial,
}

impl PayableStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PayableStatus::Pending => "PENDING",
            PayableStatus::Paid => "PAID",
            PayableStatus::Partial => "PARTIAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PayableStatus::Pending => "待付款",
            PayableStatus::Paid => "已付款",
            PayableStatus::Partial => "部分付款",
        }
    }

    pub fn all() -> Vec<PayableStatus> {
        vec![PayableStatus::Pending, PayableStatus::Partial, PayableStatus::Paid]
    }
}

/// Счёт поставщика к оплате
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableBill {
    pub id: PayableBillId,
    pub bill_no: String,
    pub supplier_name: String,
    pub amount: f64,
    pub currency: Currency,
    pub status: PayableStatus,
    pub create_time: NaiveDate,
    pub due_date: NaiveDate,
}

impl AggregateRoot for PayableBill {
    type Id = PayableBillId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.bill_no
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "payable_bill"
    }

    fn element_name() -> &'static str {
        "应付账单"
    }

    fn list_name() -> &'static str {
        "供应商应付账单"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayableBillFilter {
    /// Поиск по номеру счёта или поставщику
    pub query: String,
    pub status: Option<PayableStatus>,
    pub bill_date: Option<NaiveDate>,
}

impl ListFilter<PayableBill> for PayableBillFilter {
    fn matches(&self, item: &PayableBill) -> bool {
        (contains_ci(&item.bill_no, &self.query) || contains_ci(&item.supplier_name, &self.query))
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
    use crate::domain::a007_payable_bill::seed::seed_payable_bills;
    use crate::shared::format::day;

    #[test]
    fn test_search_and_bill_date() {
        let bills = seed_payable_bills();
        let filter = PayableBillFilter {
            query: "fedex".into(),
            ..Default::default()
        };
        assert_eq!(bills.iter().filter(|b| filter.matches(b)).count(), 2);

        let filter = PayableBillFilter {
            bill_date: Some(day(2025, 1, 20)),
            ..Default::default()
        };
        let hits: Vec<_> = bills.iter().filter(|b| filter.matches(b)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].bill_no, "PB20250120002");
    }

    #[test]
    fn test_status_filter() {
        let bills = seed_payable_bills();
        let filter = PayableBillFilter {
            status: Some(PayableStatus::Pending),
            ..Default::default()
        };
        assert_eq!(bills.iter().filter(|b| filter.matches(b)).count(), 2);
    }
}
