use serde::{Deserialize, Serialize};

/// Валюта отображения сумм на странице анализа.
///
/// Стоимость товара и заявленная стоимость хранятся в USD, налоги в HKD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxCurrency {
    Usd,
    Hkd,
}

impl TaxCurrency {
    pub fn code(&self) -> &'static str {
        match self {
            TaxCurrency::Usd => "USD",
            TaxCurrency::Hkd => "HKD",
        }
    }

    pub fn all() -> Vec<TaxCurrency> {
        vec![TaxCurrency::Hkd, TaxCurrency::Usd]
    }

    pub fn from_code(code: &str) -> Result<Self, String> {
        match code {
            "USD" => Ok(TaxCurrency::Usd),
            "HKD" => Ok(TaxCurrency::Hkd),
            _ => Err(format!("Unsupported display currency: {}", code)),
        }
    }
}

impl std::fmt::Display for TaxCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Пересчёт суммы для отображения. `fx_rate`: HKD за 1 USD.
///
/// Хранимые значения не меняются; пересчитываются только выводимые числа.
pub fn convert_for_display(value: f64, source: TaxCurrency, target: TaxCurrency, fx_rate: f64) -> f64 {
    match (source, target) {
        (TaxCurrency::Usd, TaxCurrency::Hkd) => value * fx_rate,
        (TaxCurrency::Hkd, TaxCurrency::Usd) => {
            if fx_rate == 0.0 {
                0.0
            } else {
                value / fx_rate
            }
        }
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FX: f64 = 7.78;

    #[test]
    fn test_same_currency_is_identity() {
        assert_eq!(convert_for_display(123.45, TaxCurrency::Hkd, TaxCurrency::Hkd, FX), 123.45);
        assert_eq!(convert_for_display(123.45, TaxCurrency::Usd, TaxCurrency::Usd, FX), 123.45);
    }

    #[test]
    fn test_usd_to_hkd_multiplies() {
        let v = convert_for_display(1000.0, TaxCurrency::Usd, TaxCurrency::Hkd, FX);
        assert!((v - 7780.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_is_close() {
        for x in [0.0, 0.01, 85.0, 1234.56, 1.0e7] {
            let there = convert_for_display(x, TaxCurrency::Usd, TaxCurrency::Hkd, FX);
            let back = convert_for_display(there, TaxCurrency::Hkd, TaxCurrency::Usd, FX);
            assert!((back - x).abs() < 1e-6, "{} -> {}", x, back);
        }
    }

    #[test]
    fn test_zero_rate_is_guarded() {
        assert_eq!(convert_for_display(85.0, TaxCurrency::Hkd, TaxCurrency::Usd, 0.0), 0.0);
    }

    #[test]
    fn test_deserializes_from_code() {
        let c: TaxCurrency = serde_json::from_str("\"HKD\"").unwrap();
        assert_eq!(c, TaxCurrency::Hkd);
        assert!(TaxCurrency::from_code("EUR").is_err());
    }
}
