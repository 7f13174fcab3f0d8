use serde::{Deserialize, Serialize};

/// Страны/регионы, участвующие в отправлениях (коды ISO 3166-1 alpha-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "CHN")]
    China,
    #[serde(rename = "USA")]
    UnitedStates,
    #[serde(rename = "GBR")]
    UnitedKingdom,
    #[serde(rename = "DEU")]
    Germany,
    #[serde(rename = "VNM")]
    Vietnam,
    #[serde(rename = "JPN")]
    Japan,
    #[serde(rename = "FRA")]
    France,
}

impl Country {
    /// Получить код страны
    pub fn code(&self) -> &'static str {
        match self {
            Country::China => "CHN",
            Country::UnitedStates => "USA",
            Country::UnitedKingdom => "GBR",
            Country::Germany => "DEU",
            Country::Vietnam => "VNM",
            Country::Japan => "JPN",
            Country::France => "FRA",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::China => "中国",
            Country::UnitedStates => "美国",
            Country::UnitedKingdom => "英国",
            Country::Germany => "德国",
            Country::Vietnam => "越南",
            Country::Japan => "日本",
            Country::France => "法国",
        }
    }

    /// Подпись для выпадающих списков: "CHN(中国)"
    pub fn option_label(&self) -> String {
        format!("{}({})", self.code(), self.display_name())
    }

    /// Страны, доступные в фильтрах анализа
    pub fn filter_options() -> Vec<Country> {
        vec![
            Country::China,
            Country::UnitedStates,
            Country::UnitedKingdom,
            Country::Germany,
            Country::Vietnam,
            Country::Japan,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CHN" => Some(Country::China),
            "USA" => Some(Country::UnitedStates),
            "GBR" => Some(Country::UnitedKingdom),
            "DEU" => Some(Country::Germany),
            "VNM" => Some(Country::Vietnam),
            "JPN" => Some(Country::Japan),
            "FRA" => Some(Country::France),
            _ => None,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_matches_code() {
        for country in Country::filter_options() {
            assert_eq!(Country::from_code(country.code()), Some(country));
        }
        assert_eq!(Country::from_code("FRA"), Some(Country::France));
        assert_eq!(Country::from_code("XXX"), None);
    }

    #[test]
    fn test_option_label() {
        assert_eq!(Country::Vietnam.option_label(), "VNM(越南)");
    }

    #[test]
    fn test_serde_uses_iso_codes() {
        let json = serde_json::to_string(&Country::UnitedKingdom).unwrap();
        assert_eq!(json, "\"GBR\"");
    }
}
