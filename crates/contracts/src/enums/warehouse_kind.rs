use serde::{Deserialize, Serialize};

/// Тип склада: вкладки страниц "入库管理" и "出库管理"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseKind {
    /// Передовой склад
    #[default]
    Front,
    /// Склад экспедитора
    Forwarder,
}

impl WarehouseKind {
    pub fn code(&self) -> &'static str {
        match self {
            WarehouseKind::Front => "FRONT",
            WarehouseKind::Forwarder => "FORWARDER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WarehouseKind::Front => "前置仓",
            WarehouseKind::Forwarder => "货代仓",
        }
    }

    pub fn all() -> Vec<WarehouseKind> {
        vec![WarehouseKind::Front, WarehouseKind::Forwarder]
    }
}

/// Направления, доступные в фильтре "目的地国家/地区" складских страниц
pub const WAREHOUSE_DESTINATIONS: &[(&str, &str)] = &[
    ("MEX", "墨西哥"),
    ("CHL", "智利"),
    ("BRA", "巴西"),
    ("ZAF", "南非"),
    ("HKG", "中国香港"),
    ("USA", "美国"),
    ("CAN", "加拿大"),
    ("GBR", "英国"),
    ("DEU", "德国"),
    ("FRA", "法国"),
    ("AUS", "澳大利亚"),
];

/// Название направления по коду; неизвестный код возвращается как есть
pub fn destination_name(code: &str) -> &str {
    WAREHOUSE_DESTINATIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name() {
        assert_eq!(destination_name("ZAF"), "南非");
        assert_eq!(destination_name("XXX"), "XXX");
        assert_eq!(WarehouseKind::default(), WarehouseKind::Front);
    }
}
