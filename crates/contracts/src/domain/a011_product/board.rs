//! Контроллер страницы "商品管理": товары, сопоставления с магазинами и
//! раскрытые строки коробочных спецификаций.

use super::aggregate::{
    PairingStatus, Product, ProductFilter, ProductId, ProductPairing, ProductPairingFilter,
    ProductPairingId,
};
use super::columns::ColumnLayout;
use super::form::ProductForm;
use crate::shared::config::PairingShop;
use crate::shared::error::RecordError;
use crate::shared::list::{ListPage, Selection};
use chrono::NaiveDateTime;

/// Оператор автоматически созданных сопоставлений
pub const SYSTEM_OPERATOR: &str = "System";

/// Итог сохранения формы
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created { id: ProductId, sku_id: String, pairings: usize },
    Updated { id: ProductId },
}

#[derive(Debug, Clone)]
pub struct ProductCatalog {
    pub products: ListPage<Product, ProductFilter>,
    pub pairings: ListPage<ProductPairing, ProductPairingFilter>,
    /// Колонки таблицы товаров
    pub columns: ColumnLayout,
    expanded: Selection<ProductId>,
    shops: Vec<PairingShop>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>, pairings: Vec<ProductPairing>, shops: Vec<PairingShop>) -> Self {
        Self {
            products: ListPage::new(products),
            pairings: ListPage::new(pairings),
            columns: ColumnLayout::new(),
            expanded: Selection::new(),
            shops,
        }
    }

    pub fn is_expanded(&self, id: ProductId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn toggle_expand(&mut self, id: ProductId) {
        self.expanded.toggle(id);
    }

    /// Сохранение формы: проверка обязательных полей и уникальности пары
    /// (UPC, SKU), затем создание или замена записи
    pub fn save(
        &mut self,
        form: &ProductForm,
        operator: &str,
        now: NaiveDateTime,
    ) -> Result<SaveOutcome, RecordError> {
        form.validate_required()?;

        let upc = form.upc.trim();
        let sku = form.sku_id.trim();
        let duplicate = self
            .products
            .items()
            .iter()
            .any(|p| p.upc == upc && p.sku_id == sku && Some(p.id) != form.id);
        if duplicate {
            log::warn!("product save rejected: duplicate upc={} sku={}", upc, sku);
            return Err(RecordError::Duplicate(format!(
                "当前商品已存在，商品条码为：{}，商品编码为：{}",
                upc, sku
            )));
        }

        match form.id {
            Some(id) => {
                let create_time = self
                    .products
                    .get(id)
                    .map(|p| p.create_time)
                    .ok_or_else(|| RecordError::NotFound(sku.to_string()))?;
                let product = form.to_product(id, operator, create_time, now);
                self.products.upsert(product);
                log::info!("product {} updated", sku);
                Ok(SaveOutcome::Updated { id })
            }
            None => {
                let id = ProductId::new_v4();
                let product = form.to_product(id, operator, now, now);
                let pairings = self.generate_pairings(&product, now);
                let count = pairings.len();
                for pairing in pairings.into_iter().rev() {
                    self.pairings.upsert(pairing);
                }
                let sku_id = product.sku_id.clone();
                self.products.upsert(product);
                log::info!("product {} created with {} pairing(s)", sku_id, count);
                Ok(SaveOutcome::Created {
                    id,
                    sku_id,
                    pairings: count,
                })
            }
        }
    }

    /// Сопоставления нового товара: по одному на каждый настроенный магазин,
    /// SKU магазина = UPC, название = китайское название товара
    fn generate_pairings(&self, product: &Product, now: NaiveDateTime) -> Vec<ProductPairing> {
        self.shops
            .iter()
            .map(|shop| ProductPairing {
                id: ProductPairingId::new_v4(),
                supplier_id: product.supplier_id.clone(),
                upc: product.upc.clone(),
                shop_sku: product.upc.clone(),
                product_name: product.name_cn.clone(),
                platform: shop.platform.clone(),
                shop_name: shop.shop_name.clone(),
                status: PairingStatus::OnSale,
                operator: SYSTEM_OPERATOR.to_string(),
                create_time: now,
                update_time: now,
            })
            .collect()
    }

    pub fn delete(&mut self, id: ProductId) -> Result<Product, RecordError> {
        let removed = self.products.remove(id)?;
        self.expanded.set(id, false);
        log::info!("product {} deleted", removed.sku_id);
        Ok(removed)
    }

    /// Удаление выбранных товаров, возвращает количество
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.products.remove_selected();
        let products = self.products.items();
        self.expanded
            .retain(|id| products.iter().any(|p| p.id == *id));
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_product::seed::{seed_pairings, seed_products};
    use crate::shared::config::ConsoleConfig;
    use crate::shared::format::at;

    fn catalog() -> ProductCatalog {
        let config = ConsoleConfig::load_default().unwrap();
        ProductCatalog::new(seed_products(), seed_pairings(), config.catalog.pairing_shops)
    }

    fn new_form(upc: &str, sku: &str) -> ProductForm {
        ProductForm {
            upc: upc.into(),
            sku_id: sku.into(),
            name_en: "Cushion".into(),
            name_cn: "气垫".into(),
            length: "3.456".into(),
            ..ProductForm::blank()
        }
    }

    #[test]
    fn test_create_generates_pairings_per_shop() {
        let mut c = catalog();
        let now = at(2025, 10, 14, 9, 0, 0);
        let outcome = c.save(&new_form("UPC-NEW", "SKU-NEW"), "Admin", now).unwrap();
        let SaveOutcome::Created { id, sku_id, pairings } = outcome else {
            panic!("expected creation");
        };
        assert_eq!(sku_id, "SKU-NEW");
        assert_eq!(pairings, 2);
        assert_eq!(c.products.items()[0].id, id);
        assert_eq!(c.products.items()[0].length, 3.46);

        let generated: Vec<_> = c.pairings.items().iter().take(2).collect();
        assert_eq!(generated[0].platform, "TikTok");
        assert_eq!(generated[0].shop_name, "QUEMIMULOPS");
        assert_eq!(generated[1].platform, "Amazon");
        for p in generated {
            assert_eq!(p.shop_sku, "UPC-NEW");
            assert_eq!(p.product_name, "气垫");
            assert_eq!(p.status, PairingStatus::OnSale);
            assert_eq!(p.operator, SYSTEM_OPERATOR);
        }
        assert_eq!(c.pairings.len(), 4);
    }

    #[test]
    fn test_duplicate_upc_sku_rejected() {
        let mut c = catalog();
        let now = at(2025, 10, 14, 9, 0, 0);
        let err = c
            .save(&new_form("UPC987654321", "SKU-002"), "Admin", now)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "当前商品已存在，商品条码为：UPC987654321，商品编码为：SKU-002"
        );
        assert_eq!(c.products.len(), 7);
        assert_eq!(c.pairings.len(), 2);

        // та же пара UPC с другим SKU допустима
        assert!(c.save(&new_form("UPC987654321", "SKU-XYZ"), "Admin", now).is_ok());
    }

    #[test]
    fn test_update_keeps_position_and_create_time() {
        let mut c = catalog();
        let original = c.products.items()[1].clone();
        let mut form = ProductForm::from_product(&original);
        form.brand = "Logi".into();
        let now = at(2025, 10, 14, 9, 0, 0);

        // редактирование самого себя не считается дублем
        let outcome = c.save(&form, "Pae", now).unwrap();
        assert_eq!(outcome, SaveOutcome::Updated { id: original.id });
        let updated = &c.products.items()[1];
        assert_eq!(updated.brand, "Logi");
        assert_eq!(updated.create_time, original.create_time);
        assert_eq!(updated.update_time, now);
        assert_eq!(c.pairings.len(), 2);
    }

    #[test]
    fn test_delete_single_and_selected() {
        let mut c = catalog();
        let first = c.products.items()[0].id;
        c.toggle_expand(first);
        assert!(c.is_expanded(first));
        c.delete(first).unwrap();
        assert!(!c.is_expanded(first));
        assert!(c.delete(first).is_err());

        let ids: Vec<_> = c.products.items().iter().take(3).map(|p| p.id).collect();
        for id in ids {
            c.products.toggle(id);
        }
        assert_eq!(c.delete_selected(), 3);
        assert_eq!(c.products.len(), 3);
    }

    #[test]
    fn test_column_settings_survive_record_changes() {
        use crate::domain::a011_product::columns::ProductColumnId;

        let mut c = catalog();
        c.columns.toggle_visible(ProductColumnId::Remark);
        c.columns.move_to(ProductColumnId::NameCn, 2);

        let now = at(2025, 10, 14, 9, 0, 0);
        c.save(&new_form("UPC-COL", "SKU-COL"), "Admin", now).unwrap();
        let first = c.products.items()[0].id;
        c.delete(first).unwrap();

        assert!(!c.columns.is_visible(ProductColumnId::Remark));
        assert_eq!(c.columns.columns()[2].id, ProductColumnId::NameCn);

        c.columns.reset();
        assert!(c.columns.is_visible(ProductColumnId::Remark));
        assert_eq!(c.columns.columns()[2].id, ProductColumnId::SupplierId);
    }
}
