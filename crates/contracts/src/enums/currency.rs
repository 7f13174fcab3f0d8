use serde::{Deserialize, Serialize};

/// Валюты, используемые в счетах и курсах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Hkd,
    Cny,
    Eur,
    Gbp,
}

impl Currency {
    /// Получить код валюты
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Hkd => "HKD",
            Currency::Cny => "CNY",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Получить все валюты
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::Usd,
            Currency::Hkd,
            Currency::Cny,
            Currency::Eur,
            Currency::Gbp,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Result<Self, String> {
        match code {
            "USD" => Ok(Currency::Usd),
            "HKD" => Ok(Currency::Hkd),
            "CNY" => Ok(Currency::Cny),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(format!("Unknown currency: {}", code)),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        for c in Currency::all() {
            assert_eq!(Currency::from_code(c.code()), Ok(c));
        }
        assert!(Currency::from_code("RUB").is_err());
    }
}
