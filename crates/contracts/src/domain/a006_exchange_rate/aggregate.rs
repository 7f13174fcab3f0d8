use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::Currency;
use crate::shared::list::ListFilter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор курса валют
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeRateId(pub Uuid);

impl ExchangeRateId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for ExchangeRateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ExchangeRateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Откуда получен курс
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSource {
    Manual,
    BankApi,
}

impl RateSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            RateSource::Manual => "手动录入",
            RateSource::BankApi => "银行接口",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateStatus {
    Active,
    Expired,
}

impl RateStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            RateStatus::Active => "生效中",
            RateStatus::Expired => "已失效",
        }
    }
}

/// Расчётный курс валютной пары
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: ExchangeRateId,
    pub pair: String,
    pub source_currency: Currency,
    pub target_currency: Currency,
    pub rate: f64,
    pub effective_date: NaiveDate,
    pub source: RateSource,
    pub status: RateStatus,
}

impl ExchangeRate {
    pub fn new(
        id: ExchangeRateId,
        source_currency: Currency,
        target_currency: Currency,
        rate: f64,
        effective_date: NaiveDate,
        source: RateSource,
        status: RateStatus,
    ) -> Self {
        Self {
            id,
            pair: format!("{}/{}", source_currency.code(), target_currency.code()),
            source_currency,
            target_currency,
            rate,
            effective_date,
            source,
            status,
        }
    }
}

impl AggregateRoot for ExchangeRate {
    type Id = ExchangeRateId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.pair
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "exchange_rate"
    }

    fn element_name() -> &'static str {
        "汇率"
    }

    fn list_name() -> &'static str {
        "汇率管理"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateFilter {
    pub source_currency: Option<Currency>,
}

impl ListFilter<ExchangeRate> for ExchangeRateFilter {
    fn matches(&self, item: &ExchangeRate) -> bool {
        self.source_currency.map_or(true, |c| item.source_currency == c)
    }

    fn active_count(&self) -> usize {
        usize::from(self.source_currency.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_exchange_rate::seed::seed_rates;

    #[test]
    fn test_filter_by_source_currency() {
        let rates = seed_rates();
        let filter = ExchangeRateFilter {
            source_currency: Some(Currency::Usd),
        };
        let hits: Vec<_> = rates.iter().filter(|r| filter.matches(r)).collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.pair == "USD/CNY"));
    }
}
