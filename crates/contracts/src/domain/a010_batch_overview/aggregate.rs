use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор отгрузочной партии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchOverviewId(pub Uuid);

impl BatchOverviewId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for BatchOverviewId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BatchOverviewId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Planning,
    Transit,
    Arrived,
    Cleared,
    Completed,
}

impl BatchStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BatchStatus::Planning => "PLANNING",
            BatchStatus::Transit => "TRANSIT",
            BatchStatus::Arrived => "ARRIVED",
            BatchStatus::Cleared => "CLEARED",
            BatchStatus::Completed => "COMPLETED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BatchStatus::Planning => "计划中",
            BatchStatus::Transit => "运输中",
            BatchStatus::Arrived => "已抵达",
            BatchStatus::Cleared => "已清关",
            BatchStatus::Completed => "已完成",
        }
    }

    pub fn all() -> Vec<BatchStatus> {
        vec![
            BatchStatus::Planning,
            BatchStatus::Transit,
            BatchStatus::Arrived,
            BatchStatus::Cleared,
            BatchStatus::Completed,
        ]
    }
}

/// Сводка по отгрузочной партии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOverview {
    pub id: BatchOverviewId,
    pub batch_no: String,
    pub final_country: String,
    pub order_count: u32,
    /// Прогнозный вес партии, г
    pub forecast_total_weight: u64,
    pub supplier_short_name: String,
    /// Пусто, пока партия не отгружена со склада
    pub warehouse_out_code: String,
    pub create_time: NaiveDateTime,
    pub status: BatchStatus,
}

impl BatchOverview {
    /// Прогнозный вес в килограммах
    pub fn forecast_weight_kg(&self) -> f64 {
        self.forecast_total_weight as f64 / 1000.0
    }
}

impl AggregateRoot for BatchOverview {
    type Id = BatchOverviewId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.batch_no
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "batch_overview"
    }

    fn element_name() -> &'static str {
        "批次"
    }

    fn list_name() -> &'static str {
        "批次概览"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOverviewFilter {
    pub batch_no: String,
    pub status: Option<BatchStatus>,
    pub final_country: Option<String>,
}

impl ListFilter<BatchOverview> for BatchOverviewFilter {
    fn matches(&self, item: &BatchOverview) -> bool {
        contains_ci(&item.batch_no, &self.batch_no)
            && self.status.map_or(true, |s| item.status == s)
            && self.final_country.as_ref().map_or(true, |c| &item.final_country == c)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.batch_no.trim().is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.final_country.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_batch_overview::seed::seed_batches;

    #[test]
    fn test_filter_by_batch_no_and_status() {
        let batches = seed_batches();
        let filter = BatchOverviewFilter {
            batch_no: "20250201".into(),
            ..Default::default()
        };
        assert_eq!(batches.iter().filter(|b| filter.matches(b)).count(), 2);

        let filter = BatchOverviewFilter {
            status: Some(BatchStatus::Planning),
            ..Default::default()
        };
        let hits: Vec<_> = batches.iter().filter(|b| filter.matches(b)).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].warehouse_out_code.is_empty());
        assert_eq!(hits[0].forecast_weight_kg(), 75.0);
    }
}
