use crate::domain::a001_logistics_order::aggregate::Channel;
use crate::domain::a002_tax_analysis::currency::TaxCurrency;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub tax_analysis: TaxAnalysisConfig,
    pub logistics: LogisticsConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TaxAnalysisConfig {
    /// Курс HKD за 1 USD
    pub fx_rate: f64,
    /// Валюта отображения по умолчанию
    pub default_currency: TaxCurrency,
    /// Глубина периода "создано" по умолчанию, дней
    pub default_range_days: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogisticsConfig {
    /// Канал, заказы которого не передаются в WMS
    pub priority_channel: Channel,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Магазины, для которых при создании товара заводится сопоставление
    pub pairing_shops: Vec<PairingShop>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PairingShop {
    pub platform: String,
    pub shop_name: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[tax_analysis]
fx_rate = 7.78
default_currency = "HKD"
default_range_days = 30

[logistics]
priority_channel = "Lightcone"

[catalog]
pairing_shops = [
    { platform = "TikTok", shop_name = "QUEMIMULOPS" },
    { platform = "Amazon", shop_name = "US-Store" },
]
"#;

impl ConsoleConfig {
    /// Load the embedded default configuration
    pub fn load_default() -> anyhow::Result<Self> {
        log::info!("Using default embedded configuration");
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: ConsoleConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let rate = self.tax_analysis.fx_rate;
        if !rate.is_finite() || rate <= 0.0 {
            anyhow::bail!("tax_analysis.fx_rate must be a positive number, got {}", rate);
        }
        if self.tax_analysis.default_range_days < 0 {
            anyhow::bail!("tax_analysis.default_range_days must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ConsoleConfig::load_default();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.tax_analysis.fx_rate, 7.78);
        assert_eq!(config.tax_analysis.default_currency, TaxCurrency::Hkd);
        assert_eq!(config.logistics.priority_channel, Channel::Lightcone);
        assert_eq!(config.catalog.pairing_shops.len(), 2);
        assert_eq!(config.catalog.pairing_shops[1].shop_name, "US-Store");
    }

    #[test]
    fn test_non_positive_fx_rate_rejected() {
        let text = DEFAULT_CONFIG.replace("fx_rate = 7.78", "fx_rate = 0.0");
        assert!(ConsoleConfig::from_toml_str(&text).is_err());
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let text = DEFAULT_CONFIG.replace("\"HKD\"", "\"EUR\"");
        assert!(ConsoleConfig::from_toml_str(&text).is_err());
    }
}
