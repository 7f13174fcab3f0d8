use super::calculator::{compute_derived, DerivedFields, RawAmounts};
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::Country;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор записи налогового анализа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxAnalysisRecordId(pub Uuid);

impl TaxAnalysisRecordId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for TaxAnalysisRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TaxAnalysisRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись "货值-税费分析".
///
/// Хранит только исходные суммы; ставки и разницы вычисляются через
/// [`TaxAnalysisRecord::derived`]. Изменяемое поле одно: примечание.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAnalysisRecord {
    pub id: TaxAnalysisRecordId,
    pub create_time: NaiveDateTime,
    pub origin_country: Country,
    pub dest_country: Country,
    pub supplier_waybill_no: String,
    pub merchant_order_no: String,
    pub tracking_no: String,
    /// USD
    pub goods_value: f64,
    /// USD
    pub declared_value: f64,
    /// HKD
    pub estimated_tax: f64,
    /// HKD
    pub actual_tax: f64,
    pub remark: String,
}

impl TaxAnalysisRecord {
    pub fn raw(&self) -> RawAmounts {
        RawAmounts {
            goods_value: self.goods_value,
            declared_value: self.declared_value,
            estimated_tax: self.estimated_tax,
            actual_tax: self.actual_tax,
        }
    }

    pub fn derived(&self, fx_rate: f64) -> DerivedFields {
        compute_derived(&self.raw(), fx_rate)
    }
}

impl AggregateRoot for TaxAnalysisRecord {
    type Id = TaxAnalysisRecordId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.merchant_order_no
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "tax_analysis"
    }

    fn element_name() -> &'static str {
        "税费分析记录"
    }

    fn list_name() -> &'static str {
        "货值-税费分析"
    }
}
