use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::RecordStatus;
use crate::shared::list::{contains_ci, ListFilter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Вид услуг поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierType {
    Logistics,
    Warehouse,
    Customs,
}

impl SupplierType {
    pub fn code(&self) -> &'static str {
        match self {
            SupplierType::Logistics => "LOGISTICS",
            SupplierType::Warehouse => "WAREHOUSE",
            SupplierType::Customs => "CUSTOMS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupplierType::Logistics => "物流商",
            SupplierType::Warehouse => "仓储服务",
            SupplierType::Customs => "报关行",
        }
    }

    pub fn all() -> Vec<SupplierType> {
        vec![SupplierType::Logistics, SupplierType::Warehouse, SupplierType::Customs]
    }

    pub fn from_code(code: &str) -> Result<Self, String> {
        Self::all()
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| format!("Unknown supplier type: {}", code))
    }
}

/// Поставщик услуг (перевозчик, склад, таможенный брокер)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub supplier_type: SupplierType,
    pub status: RecordStatus,
    pub create_time: NaiveDate,
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "供应商"
    }

    fn list_name() -> &'static str {
        "供应商管理"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierFilter {
    pub name: String,
    pub supplier_type: Option<SupplierType>,
    pub status: Option<RecordStatus>,
}

impl ListFilter<Supplier> for SupplierFilter {
    fn matches(&self, item: &Supplier) -> bool {
        contains_ci(&item.name, &self.name)
            && self.supplier_type.map_or(true, |t| item.supplier_type == t)
            && self.status.map_or(true, |s| item.status == s)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.name.trim().is_empty())
            + usize::from(self.supplier_type.is_some())
            + usize::from(self.status.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_supplier::seed::seed_suppliers;

    #[test]
    fn test_filter_by_name_type_and_status() {
        let suppliers = seed_suppliers();
        let count = |f: &SupplierFilter| suppliers.iter().filter(|s| f.matches(s)).count();

        assert_eq!(count(&SupplierFilter::default()), 4);
        let by_name = SupplierFilter {
            name: "dhl".into(),
            ..Default::default()
        };
        assert_eq!(count(&by_name), 1);
        let logistics_active = SupplierFilter {
            supplier_type: Some(SupplierType::Logistics),
            status: Some(RecordStatus::Active),
            ..Default::default()
        };
        assert_eq!(count(&logistics_active), 2);
        assert_eq!(logistics_active.active_count(), 2);
    }
}
