use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::Currency;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор закупочного предложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseQuoteId(pub Uuid);

impl PurchaseQuoteId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for PurchaseQuoteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseQuoteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Уникальный идентификатор продажного предложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesQuoteId(pub Uuid);

impl SalesQuoteId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for SalesQuoteId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalesQuoteId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    Draft,
    Confirmed,
}

impl QuoteStatus {
    pub fn code(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "DRAFT",
            QuoteStatus::Confirmed => "CONFIRMED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "草稿",
            QuoteStatus::Confirmed => "已确认",
        }
    }

    pub fn all() -> Vec<QuoteStatus> {
        vec![QuoteStatus::Draft, QuoteStatus::Confirmed]
    }
}

/// Закупочное предложение (询价) от поставщика
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseQuote {
    pub id: PurchaseQuoteId,
    /// P0001, P0002, ...
    pub quote_no: String,
    pub supplier: String,
    pub origin: String,
    pub destination: String,
    pub product_name: String,
    /// B2B / B2C
    pub service_type: String,
    pub status: QuoteStatus,
    pub created_time: NaiveDateTime,
    pub confirmed_time: Option<NaiveDateTime>,
    pub kg_per_batch: String,
    /// Тариф перевозки за кг
    pub transport_fee: f64,
    pub operation_fee: f64,
    /// DDP / DDU
    pub tax_mode: String,
    pub currency: Currency,
    pub product_notes: String,
}

impl AggregateRoot for PurchaseQuote {
    type Id = PurchaseQuoteId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.quote_no
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "purchase_quote"
    }

    fn element_name() -> &'static str {
        "采购报价"
    }

    fn list_name() -> &'static str {
        "采购询价"
    }
}

/// Продажное предложение клиенту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesQuote {
    pub id: SalesQuoteId,
    /// S0001, S0002, ...
    pub quote_no: String,
    /// Номер закупочного предложения-источника
    pub source_quote_no: String,
    pub origin: String,
    pub destination: String,
    pub product_name: String,
    pub service_type: String,
    pub status: QuoteStatus,
    pub created_time: NaiveDateTime,
    pub confirmed_time: Option<NaiveDateTime>,
    pub kg_per_batch: String,
    pub transport_fee: f64,
    pub operation_fee: f64,
    pub tax_mode: String,
    pub cs_declared_amount: String,
    pub composite_tax_rate: String,
    pub customer_notes: String,
}

impl AggregateRoot for SalesQuote {
    type Id = SalesQuoteId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.quote_no
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "sales_quote"
    }

    fn element_name() -> &'static str {
        "销售报价"
    }

    fn list_name() -> &'static str {
        "销售报价"
    }
}

/// Фильтр обеих вкладок страницы "报价管理"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteFilter {
    /// Поиск по номеру предложения или товару
    pub query: String,
    pub status: Option<QuoteStatus>,
}

impl QuoteFilter {
    fn check(&self, quote_no: &str, product_name: &str, status: QuoteStatus) -> bool {
        (contains_ci(quote_no, &self.query) || contains_ci(product_name, &self.query))
            && self.status.map_or(true, |s| s == status)
    }

    fn count(&self) -> usize {
        usize::from(!self.query.trim().is_empty()) + usize::from(self.status.is_some())
    }
}

impl ListFilter<PurchaseQuote> for QuoteFilter {
    fn matches(&self, item: &PurchaseQuote) -> bool {
        self.check(&item.quote_no, &item.product_name, item.status)
    }

    fn active_count(&self) -> usize {
        self.count()
    }
}

impl ListFilter<SalesQuote> for QuoteFilter {
    fn matches(&self, item: &SalesQuote) -> bool {
        self.check(&item.quote_no, &item.product_name, item.status)
    }

    fn active_count(&self) -> usize {
        self.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a012_quotation::seed::{seed_purchase_quotes, seed_sales_quotes};

    #[test]
    fn test_filter_applies_to_both_quote_kinds() {
        let filter = QuoteFilter {
            query: "textiles".into(),
            ..Default::default()
        };
        let purchase: Vec<_> = seed_purchase_quotes()
            .into_iter()
            .filter(|q| filter.matches(q))
            .map(|q| q.quote_no)
            .collect();
        assert_eq!(purchase, vec!["P0002"]);
        assert_eq!(
            seed_sales_quotes().iter().filter(|q| filter.matches(*q)).count(),
            1
        );

        let drafts = QuoteFilter {
            query: "p000".into(),
            status: Some(QuoteStatus::Draft),
        };
        let purchase: Vec<_> = seed_purchase_quotes()
            .into_iter()
            .filter(|q| drafts.matches(q))
            .map(|q| q.quote_no)
            .collect();
        assert_eq!(purchase, vec!["P0001"]);
        assert_eq!(ListFilter::<PurchaseQuote>::active_count(&drafts), 2);
    }
}
