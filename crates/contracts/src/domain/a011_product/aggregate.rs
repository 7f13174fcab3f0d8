use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::list::{contains_ci, ListFilter};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Уникальный идентификатор сопоставления товара с магазином
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductPairingId(pub Uuid);

impl ProductPairingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ProductPairingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductPairingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Коробочная спецификация (箱规): сколько штук в коробке и габариты коробки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSpec {
    pub box_sku_id: String,
    pub pcs_per_box: u32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub supplier_id: String,
    pub sku_id: String,
    pub upc: String,
    pub brand: String,
    pub name_en: String,
    pub name_cn: String,
    pub image_url: String,
    /// Габариты единицы товара, см
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub remark: String,
    pub operator: String,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
    pub box_specs: Vec<BoxSpec>,
}

impl Product {
    /// Коды коробочных спецификаций через запятую (колонка "箱规编码")
    pub fn box_sku_summary(&self) -> String {
        self.box_specs
            .iter()
            .map(|spec| spec.box_sku_id.as_str())
            .filter(|code| !code.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.sku_id
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "商品"
    }

    fn list_name() -> &'static str {
        "商品管理"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairingStatus {
    OnSale,
    OffSale,
}

impl PairingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PairingStatus::OnSale => "ON_SALE",
            PairingStatus::OffSale => "OFF_SALE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PairingStatus::OnSale => "在售",
            PairingStatus::OffSale => "停售",
        }
    }

    pub fn all() -> Vec<PairingStatus> {
        vec![PairingStatus::OnSale, PairingStatus::OffSale]
    }
}

/// Сопоставление товара с SKU магазина на площадке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPairing {
    pub id: ProductPairingId,
    pub supplier_id: String,
    pub upc: String,
    pub shop_sku: String,
    pub product_name: String,
    pub platform: String,
    pub shop_name: String,
    pub status: PairingStatus,
    pub operator: String,
    pub create_time: NaiveDateTime,
    pub update_time: NaiveDateTime,
}

impl AggregateRoot for ProductPairing {
    type Id = ProductPairingId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.shop_sku
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "product_pairing"
    }

    fn element_name() -> &'static str {
        "产品配对"
    }

    fn list_name() -> &'static str {
        "产品配对"
    }
}

/// Поле, по которому ищет строка "产品信息"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSearchField {
    #[default]
    Upc,
    SkuId,
    BoxSku,
    Brand,
    NameCn,
}

impl ProductSearchField {
    pub fn code(&self) -> &'static str {
        match self {
            ProductSearchField::Upc => "UPC",
            ProductSearchField::SkuId => "SKU_ID",
            ProductSearchField::BoxSku => "BOX_SKU",
            ProductSearchField::Brand => "BRAND",
            ProductSearchField::NameCn => "NAME_CN",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductSearchField::Upc => "商品条码",
            ProductSearchField::SkuId => "商品编码",
            ProductSearchField::BoxSku => "箱规编码",
            ProductSearchField::Brand => "品牌",
            ProductSearchField::NameCn => "中文商品名称",
        }
    }

    pub fn all() -> Vec<ProductSearchField> {
        vec![
            ProductSearchField::Upc,
            ProductSearchField::SkuId,
            ProductSearchField::BoxSku,
            ProductSearchField::Brand,
            ProductSearchField::NameCn,
        ]
    }

    pub fn from_code(code: &str) -> Option<ProductSearchField> {
        Self::all().into_iter().find(|f| f.code() == code)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub field: ProductSearchField,
    pub value: String,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

impl ProductFilter {
    fn field_matches(&self, item: &Product) -> bool {
        match self.field {
            ProductSearchField::Upc => contains_ci(&item.upc, &self.value),
            ProductSearchField::SkuId => contains_ci(&item.sku_id, &self.value),
            ProductSearchField::BoxSku => {
                self.value.trim().is_empty()
                    || item
                        .box_specs
                        .iter()
                        .any(|spec| contains_ci(&spec.box_sku_id, &self.value))
            }
            ProductSearchField::Brand => contains_ci(&item.brand, &self.value),
            ProductSearchField::NameCn => {
                contains_ci(&item.name_cn, &self.value) || contains_ci(&item.name_en, &self.value)
            }
        }
    }
}

impl ListFilter<Product> for ProductFilter {
    fn matches(&self, item: &Product) -> bool {
        let created = item.create_time.date();
        self.field_matches(item)
            && self.created_from.map_or(true, |from| created >= from)
            && self.created_to.map_or(true, |to| created <= to)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.value.trim().is_empty())
            + usize::from(self.created_from.is_some() || self.created_to.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPairingFilter {
    /// Поиск по UPC, SKU магазина или названию
    pub query: String,
    pub status: Option<PairingStatus>,
}

impl ListFilter<ProductPairing> for ProductPairingFilter {
    fn matches(&self, item: &ProductPairing) -> bool {
        (contains_ci(&item.upc, &self.query)
            || contains_ci(&item.shop_sku, &self.query)
            || contains_ci(&item.product_name, &self.query))
            && self.status.map_or(true, |s| item.status == s)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.query.trim().is_empty()) + usize::from(self.status.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_product::seed::{seed_pairings, seed_products};
    use crate::shared::format::day;

    fn hits(filter: &ProductFilter) -> Vec<String> {
        seed_products()
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.sku_id)
            .collect()
    }

    #[test]
    fn test_search_by_selected_field() {
        let by_upc = ProductFilter {
            value: "upc98".into(),
            ..Default::default()
        };
        assert_eq!(hits(&by_upc), vec!["SKU-002"]);

        let by_box = ProductFilter {
            field: ProductSearchField::BoxSku,
            value: "1120454106".into(),
            ..Default::default()
        };
        assert_eq!(hits(&by_box), vec!["1120450256"]);

        let by_brand = ProductFilter {
            field: ProductSearchField::Brand,
            value: "skin1004".into(),
            ..Default::default()
        };
        assert_eq!(hits(&by_brand).len(), 4);
    }

    #[test]
    fn test_created_range_is_inclusive() {
        let filter = ProductFilter {
            created_from: Some(day(2025, 10, 13)),
            created_to: Some(day(2025, 10, 13)),
            ..Default::default()
        };
        assert_eq!(hits(&filter), vec!["SKU-005", "SKU-006", "1120450261"]);
        assert_eq!(filter.active_count(), 1);
    }

    #[test]
    fn test_box_sku_summary() {
        let products = seed_products();
        assert_eq!(products[0].box_sku_summary(), "1129048957, 1120454106");
        assert_eq!(products[4].box_sku_summary(), "");
    }

    #[test]
    fn test_pairing_filter() {
        let filter = ProductPairingFilter {
            status: Some(PairingStatus::OffSale),
            ..Default::default()
        };
        let pairings = seed_pairings();
        let hits: Vec<_> = pairings.iter().filter(|p| filter.matches(p)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].shop_sku, "893202946965");
    }
}
