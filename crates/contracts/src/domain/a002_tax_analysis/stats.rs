//! Сводная статистика по направлениям назначения

use crate::enums::Country;
use serde::{Deserialize, Serialize};

/// Агрегированные показатели одного направления
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DestinationStats {
    pub country: Country,
    pub total_orders: u64,
    /// USD
    pub goods_value: f64,
    /// USD
    pub declared_value: f64,
    /// HKD
    pub actual_tax: f64,
}

/// Итог по выбранным направлениям
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_orders: u64,
    pub goods_value: f64,
    pub declared_value: f64,
    pub actual_tax: f64,
    /// Средневзвешенная фактическая ставка: Σ actualTax / (Σ declared × fx)
    pub tax_ratio: f64,
}

/// Суммирует показатели по выбранным направлениям (пустой выбор означает все).
///
/// Ставка считается по итоговым суммам, а не как среднее ставок направлений.
pub fn summarize(sources: &[DestinationStats], selected: &[Country], fx_rate: f64) -> StatsSummary {
    let mut summary = StatsSummary::default();

    for s in sources
        .iter()
        .filter(|s| selected.is_empty() || selected.contains(&s.country))
    {
        summary.total_orders += s.total_orders;
        summary.goods_value += s.goods_value;
        summary.declared_value += s.declared_value;
        summary.actual_tax += s.actual_tax;
    }

    let denominator = summary.declared_value * fx_rate;
    summary.tax_ratio = if denominator > 0.0 {
        summary.actual_tax / denominator
    } else {
        0.0
    };
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tax_analysis::seed::seed_destination_stats;

    const FX: f64 = 7.78;

    #[test]
    fn test_empty_selection_means_all() {
        let sources = seed_destination_stats();
        let all = summarize(&sources, &[], FX);
        assert_eq!(all.total_orders, 450 + 342 + 256 + 189 + 120 + 80);
        assert!((all.goods_value - 52300.0).abs() < 1e-9);
        assert!((all.declared_value - 46600.0).abs() < 1e-9);
    }

    #[test]
    fn test_selected_destinations_only() {
        let sources = seed_destination_stats();
        let s = summarize(&sources, &[Country::China, Country::Japan], FX);
        assert_eq!(s.total_orders, 530);
        assert!((s.actual_tax - 13250.0).abs() < 1e-9);
        assert!((s.tax_ratio - 13250.0 / (16300.0 * FX)).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_ratio_differs_from_mean_of_ratios() {
        let sources = seed_destination_stats();
        let selected = [Country::China, Country::Japan];
        let weighted = summarize(&sources, &selected, FX).tax_ratio;
        let mean = selected
            .iter()
            .map(|c| summarize(&sources, &[*c], FX).tax_ratio)
            .sum::<f64>()
            / selected.len() as f64;
        assert!((weighted - mean).abs() > 1e-6);
    }

    #[test]
    fn test_unknown_destination_contributes_nothing() {
        let sources = seed_destination_stats();
        let s = summarize(&sources, &[Country::France], FX);
        assert_eq!(s.total_orders, 0);
        assert_eq!(s.tax_ratio, 0.0);
    }
}
