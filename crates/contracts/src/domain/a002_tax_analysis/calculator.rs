//! Производные показатели записи налогового анализа.
//!
//! Все функции чистые: показатели пересчитываются при каждом чтении и никогда
//! не хранятся. Неположительный делитель даёт 0, а не NaN/∞.

use serde::{Deserialize, Serialize};

/// Исходные суммы записи: стоимость товара и заявленная стоимость в USD,
/// налоги в HKD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawAmounts {
    pub goods_value: f64,
    pub declared_value: f64,
    pub estimated_tax: f64,
    pub actual_tax: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFields {
    /// 申报比例 = declared / goods
    pub declared_ratio: f64,
    /// 预估税率 = estimatedTax / (declared × fx)
    pub estimated_tax_rate: f64,
    /// 实际税率 = actualTax / (declared × fx)
    pub actual_tax_rate: f64,
    /// 实际货值预估税费 (HKD) = goods × actualTaxRate × fx
    pub estimated_tax_on_actual_value: f64,
    /// 对比差异 (HKD)
    pub diff: f64,
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}

pub fn compute_derived(raw: &RawAmounts, fx_rate: f64) -> DerivedFields {
    let declared_hkd = raw.declared_value * fx_rate;

    let declared_ratio = ratio(raw.declared_value, raw.goods_value);
    let estimated_tax_rate = ratio(raw.estimated_tax, declared_hkd);
    let actual_tax_rate = ratio(raw.actual_tax, declared_hkd);
    let estimated_tax_on_actual_value = raw.goods_value * actual_tax_rate * fx_rate;

    DerivedFields {
        declared_ratio,
        estimated_tax_rate,
        actual_tax_rate,
        estimated_tax_on_actual_value,
        diff: estimated_tax_on_actual_value - raw.actual_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::format::format_percent;

    const FX: f64 = 7.78;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn raw(goods: f64, declared: f64, est: f64, actual: f64) -> RawAmounts {
        RawAmounts {
            goods_value: goods,
            declared_value: declared,
            estimated_tax: est,
            actual_tax: actual,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let d = compute_derived(&raw(1000.0, 800.0, 80.0, 85.0), FX);
        assert!(approx(d.declared_ratio, 0.8));
        assert_eq!(format_percent(d.declared_ratio), "80.00%");
        assert_eq!(format_percent(d.estimated_tax_rate), "1.29%");
        assert_eq!(format_percent(d.actual_tax_rate), "1.37%");
        // 1000 × 85 / (800 × 7.78) × 7.78 = 106.25
        assert!(approx(d.estimated_tax_on_actual_value, 106.25));
        assert!(approx(d.diff, 21.25));
    }

    #[test]
    fn test_zero_goods_value_gives_zero_ratio() {
        let d = compute_derived(&raw(0.0, 800.0, 80.0, 85.0), FX);
        assert_eq!(d.declared_ratio, 0.0);
        assert_eq!(d.estimated_tax_on_actual_value, 0.0);
        assert!(approx(d.diff, -85.0));
    }

    #[test]
    fn test_zero_declared_value_gives_zero_rates() {
        let d = compute_derived(&raw(1000.0, 0.0, 80.0, 85.0), FX);
        assert_eq!(d.estimated_tax_rate, 0.0);
        assert_eq!(d.actual_tax_rate, 0.0);
        assert_eq!(d.declared_ratio, 0.0);
        assert!(d.diff.is_finite());
    }

    #[test]
    fn test_zero_rate_never_produces_nan() {
        let d = compute_derived(&raw(0.0, 0.0, 0.0, 0.0), 0.0);
        for v in [
            d.declared_ratio,
            d.estimated_tax_rate,
            d.actual_tax_rate,
            d.estimated_tax_on_actual_value,
            d.diff,
        ] {
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_negative_denominator_gives_zero_ratio() {
        let d = compute_derived(&raw(-1000.0, 800.0, 80.0, 85.0), FX);
        assert_eq!(d.declared_ratio, 0.0);
        assert!(d.actual_tax_rate > 0.0);

        let d = compute_derived(&raw(1000.0, -800.0, 80.0, 85.0), FX);
        assert_eq!(d.estimated_tax_rate, 0.0);
        assert_eq!(d.actual_tax_rate, 0.0);
        assert!(d.declared_ratio < 0.0);
        assert_eq!(d.estimated_tax_on_actual_value, 0.0);
        assert!(approx(d.diff, -85.0));
    }

    #[test]
    fn test_idempotent() {
        let r = raw(1500.0, 1500.0, 285.0, 300.0);
        assert_eq!(compute_derived(&r, FX), compute_derived(&r, FX));
    }

    #[test]
    fn test_negative_diff_when_declared_exceeds_goods() {
        let d = compute_derived(&raw(800.0, 1000.0, 100.0, 120.0), FX);
        assert!(d.diff < 0.0);
        assert!(approx(d.diff, 800.0 * 120.0 / 1000.0 - 120.0));
    }
}
