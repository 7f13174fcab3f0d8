use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::RecordStatus;
use crate::shared::list::{contains_ci, ListFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор порта/пункта пропуска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortId(pub Uuid);

impl PortId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
}

impl AggregateId for PortId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PortId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortType {
    Air,
    Sea,
    Land,
}

impl PortType {
    pub fn code(&self) -> &'static str {
        match self {
            PortType::Air => "AIR",
            PortType::Sea => "SEA",
            PortType::Land => "LAND",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PortType::Air => "空运",
            PortType::Sea => "海运",
            PortType::Land => "陆运",
        }
    }

    pub fn all() -> Vec<PortType> {
        vec![PortType::Air, PortType::Sea, PortType::Land]
    }

    pub fn from_code(code: &str) -> Result<Self, String> {
        Self::all()
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| format!("Unknown port type: {}", code))
    }
}

/// Порт, аэропорт или сухопутный пункт пропуска
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: PortId,
    /// IATA или UN/LOCODE
    pub code: String,
    pub name_en: String,
    pub name_cn: String,
    pub country: String,
    pub city: String,
    pub port_type: PortType,
    pub status: RecordStatus,
    pub timezone: Option<String>,
}

impl AggregateRoot for Port {
    type Id = PortId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "port"
    }

    fn element_name() -> &'static str {
        "口岸"
    }

    fn list_name() -> &'static str {
        "港口/口岸管理"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortFilter {
    /// Поиск по коду, английскому или китайскому названию
    pub query: String,
    pub port_type: Option<PortType>,
    pub country: Option<String>,
}

impl ListFilter<Port> for PortFilter {
    fn matches(&self, item: &Port) -> bool {
        (contains_ci(&item.code, &self.query)
            || contains_ci(&item.name_en, &self.query)
            || contains_ci(&item.name_cn, &self.query))
            && self.port_type.map_or(true, |t| item.port_type == t)
            && self.country.as_ref().map_or(true, |c| &item.country == c)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.query.trim().is_empty())
            + usize::from(self.port_type.is_some())
            + usize::from(self.country.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_port::seed::seed_ports;

    #[test]
    fn test_search_matches_chinese_name() {
        let ports = seed_ports();
        let filter = PortFilter {
            query: "上海".into(),
            ..Default::default()
        };
        assert_eq!(ports.iter().filter(|p| filter.matches(p)).count(), 2);
    }

    #[test]
    fn test_type_filter() {
        let ports = seed_ports();
        let filter = PortFilter {
            port_type: Some(PortType::Sea),
            ..Default::default()
        };
        let codes: Vec<_> = ports
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, vec!["SHA", "LGB"]);
    }
}
