use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::RecordStatus;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор международной линии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternationalLineId(pub Uuid);

impl InternationalLineId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for InternationalLineId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InternationalLineId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Страны назначения, доступные в фильтре линий: (значение, подпись)
pub const LINE_DESTINATIONS: [(&str, &str); 4] = [
    ("USA", "美国 (USA)"),
    ("Germany", "德国 (DEU)"),
    ("Japan", "日本 (JPN)"),
    ("Mexico", "墨西哥 (MEX)"),
];

/// Международная линия доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalLine {
    pub id: InternationalLineId,
    pub name: String,
    pub code: String,
    pub destination_country: String,
    pub transporter: String,
    pub status: RecordStatus,
    pub create_time: NaiveDate,
}

impl AggregateRoot for InternationalLine {
    type Id = InternationalLineId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "international_line"
    }

    fn element_name() -> &'static str {
        "国际线路"
    }

    fn list_name() -> &'static str {
        "国际线路管理"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternationalLineFilter {
    /// Поиск по названию или коду линии
    pub query: String,
    pub destination_country: Option<String>,
    pub status: Option<RecordStatus>,
}

impl ListFilter<InternationalLine> for InternationalLineFilter {
    fn matches(&self, item: &InternationalLine) -> bool {
        (contains_ci(&item.name, &self.query) || contains_ci(&item.code, &self.query))
            && self
                .destination_country
                .as_ref()
                .map_or(true, |c| &item.destination_country == c)
            && self.status.map_or(true, |s| item.status == s)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.query.trim().is_empty())
            + usize::from(self.destination_country.is_some())
            + usize::from(self.status.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_international_line::seed::seed_lines;

    #[test]
    fn test_search_by_name_or_code() {
        let lines = seed_lines();
        let filter = InternationalLineFilter {
            query: "jp-dir".into(),
            ..Default::default()
        };
        let hits: Vec<_> = lines.iter().filter(|l| filter.matches(l)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Japan Direct");

        let filter = InternationalLineFilter {
            query: "line".into(),
            ..Default::default()
        };
        assert_eq!(lines.iter().filter(|l| filter.matches(l)).count(), 1);
    }

    #[test]
    fn test_country_and_status_filters() {
        let lines = seed_lines();
        let filter = InternationalLineFilter {
            destination_country: Some("Japan".into()),
            status: Some(RecordStatus::Active),
            ..Default::default()
        };
        assert_eq!(lines.iter().filter(|l| filter.matches(l)).count(), 0);
    }
}
