use crate::shared::list_utils::pick_by_code;
use contracts::domain::a011_product::aggregate::{
    BoxSpec, PairingStatus, Product, ProductFilter, ProductId, ProductPairingFilter,
    ProductSearchField,
};
use contracts::domain::a011_product::board::{ProductCatalog, SaveOutcome};
use contracts::domain::a011_product::columns::{ColumnPin, ProductColumnId};
use contracts::domain::a011_product::form::ProductForm;
use contracts::domain::a011_product::seed::{seed_pairings, seed_products};
use contracts::shared::config::CatalogConfig;
use contracts::shared::format::{format_number_with_decimals, parse_date};
use leptos::prelude::*;

/// Оператор, от имени которого сохраняются товары
pub const CURRENT_OPERATOR: &str = "Admin";

pub const TAB_PRODUCTS: &str = "products";
pub const TAB_PAIRINGS: &str = "pairings";

/// Условия поиска товаров; применяются кнопкой "查询"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilterInput {
    /// Код `ProductSearchField`
    pub field: String,
    pub value: String,
    pub created_from: String,
    pub created_to: String,
}

impl ProductFilterInput {
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter {
            field: ProductSearchField::from_code(&self.field).unwrap_or_default(),
            value: self.value.trim().to_string(),
            created_from: parse_date(&self.created_from),
            created_to: parse_date(&self.created_to),
        }
    }
}

pub fn build_pairing_filter(query: &str, status: &str) -> ProductPairingFilter {
    ProductPairingFilter {
        query: query.trim().to_string(),
        status: pick_by_code(PairingStatus::all(), status, |s| s.code()),
    }
}

/// Заголовок и текст уведомления об успешном сохранении
pub fn save_notice(outcome: &SaveOutcome) -> (&'static str, String) {
    match outcome {
        SaveOutcome::Created { sku_id, pairings, .. } => (
            "创建成功",
            format!("商品 {} 已创建，并自动生成 {} 条配对记录", sku_id, pairings),
        ),
        SaveOutcome::Updated { .. } => ("更新成功", "商品及箱规信息已更新".to_string()),
    }
}

pub fn dim(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Колонка "箱规" основной строки: штук в коробке по каждой спецификации
pub fn pcs_per_box_summary(product: &Product) -> String {
    if product.box_specs.is_empty() {
        return "-".to_string();
    }
    product
        .box_specs
        .iter()
        .map(|spec| spec.pcs_per_box.to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Текст ячейки раскрытой строки спецификации в колонке `column`
pub fn box_spec_cell_text(column: ProductColumnId, product: &Product, spec: &BoxSpec) -> String {
    match column {
        ProductColumnId::Expand | ProductColumnId::Action => String::new(),
        ProductColumnId::Upc => product.upc.clone(),
        ProductColumnId::SkuId => product.sku_id.clone(),
        ProductColumnId::BoxSku => spec.box_sku_id.clone(),
        ProductColumnId::Brand => product.brand.clone(),
        ProductColumnId::NameEn => product.name_en.clone(),
        ProductColumnId::NameCn => product.name_cn.clone(),
        ProductColumnId::BoxSpecs => spec.pcs_per_box.to_string(),
        ProductColumnId::Weight => dim(spec.weight),
        ProductColumnId::Length => dim(spec.length),
        ProductColumnId::Width => dim(spec.width),
        ProductColumnId::Height => dim(spec.height),
        ProductColumnId::Image
        | ProductColumnId::SupplierId
        | ProductColumnId::Remark
        | ProductColumnId::Operator
        | ProductColumnId::CreateTime
        | ProductColumnId::UpdateTime => "-".to_string(),
    }
}

/// В репозитории нет таблицы стилей, закрепление задаётся inline
const STICKY_CELL: &str = "position: sticky; z-index: 1; background: inherit; ";

/// CSS-класс и inline-стиль закреплённой колонки
pub fn pin_attrs(pin: Option<ColumnPin>, left_offset: f64) -> (&'static str, String) {
    match pin {
        Some(ColumnPin::Left) => (
            "table__cell--pinned-left",
            format!("{}left: {}px;", STICKY_CELL, left_offset),
        ),
        Some(ColumnPin::Right) => ("table__cell--pinned-right", format!("{}right: 0px;", STICKY_CELL)),
        None => ("", String::new()),
    }
}

/// Значение радиокнопки закрепления в диалоге настроек колонок
pub fn pin_code(pin: Option<ColumnPin>) -> &'static str {
    match pin {
        None => "NONE",
        Some(ColumnPin::Left) => "LEFT",
        Some(ColumnPin::Right) => "RIGHT",
    }
}

pub fn pin_from_code(code: &str) -> Option<ColumnPin> {
    match code {
        "LEFT" => Some(ColumnPin::Left),
        "RIGHT" => Some(ColumnPin::Right),
        _ => None,
    }
}

/// Что удаляется после подтверждения
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteTarget {
    Single(ProductId),
    Selected,
}

#[derive(Clone, Copy)]
pub struct ProductListState {
    pub catalog: RwSignal<ProductCatalog>,
    pub tab: RwSignal<String>,
    pub search_field: RwSignal<String>,
    pub search_value: RwSignal<String>,
    pub created_from: RwSignal<String>,
    pub created_to: RwSignal<String>,
    pub pairing_query: RwSignal<String>,
    pub pairing_status: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub form: RwSignal<ProductForm>,
    pub form_open: RwSignal<bool>,
    pub delete_target: RwSignal<Option<DeleteTarget>>,
    pub confirm_delete_open: RwSignal<bool>,
    pub columns_open: RwSignal<bool>,
    /// Перетаскиваемый чип колонки и позиция, над которой он сейчас
    pub dragged_column: RwSignal<Option<ProductColumnId>>,
    pub drag_over: RwSignal<Option<usize>>,
}

impl ProductListState {
    fn input(&self) -> ProductFilterInput {
        ProductFilterInput {
            field: self.search_field.get_untracked(),
            value: self.search_value.get_untracked(),
            created_from: self.created_from.get_untracked(),
            created_to: self.created_to.get_untracked(),
        }
    }

    pub fn search(&self) {
        let filter = self.input().to_filter();
        self.catalog.update(|c| c.products.set_filter(filter));
    }

    pub fn reset(&self) {
        self.search_field.set(ProductSearchField::default().code().to_string());
        self.search_value.set(String::new());
        self.created_from.set(String::new());
        self.created_to.set(String::new());
        self.catalog.update(|c| c.products.reset_filter());
    }

    pub fn open_create(&self) {
        self.form.set(ProductForm::blank());
        self.form_open.set(true);
    }

    pub fn open_edit(&self, id: ProductId) {
        let form = self
            .catalog
            .with_untracked(|c| c.products.get(id).map(ProductForm::from_product));
        if let Some(form) = form {
            self.form.set(form);
            self.form_open.set(true);
        }
    }

    pub fn ask_delete(&self, target: DeleteTarget) {
        self.delete_target.set(Some(target));
        self.confirm_delete_open.set(true);
    }

    pub fn finish_column_drag(&self) {
        let dragged = self.dragged_column.get_untracked();
        let over = self.drag_over.get_untracked();
        if let (Some(id), Some(to)) = (dragged, over) {
            self.catalog.update(|c| {
                c.columns.move_to(id, to);
            });
        }
        self.dragged_column.set(None);
        self.drag_over.set(None);
    }
}

pub fn create_state(config: &CatalogConfig) -> ProductListState {
    ProductListState {
        catalog: RwSignal::new(ProductCatalog::new(
            seed_products(),
            seed_pairings(),
            config.pairing_shops.clone(),
        )),
        tab: RwSignal::new(TAB_PRODUCTS.to_string()),
        search_field: RwSignal::new(ProductSearchField::default().code().to_string()),
        search_value: RwSignal::new(String::new()),
        created_from: RwSignal::new(String::new()),
        created_to: RwSignal::new(String::new()),
        pairing_query: RwSignal::new(String::new()),
        pairing_status: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
        form: RwSignal::new(ProductForm::blank()),
        form_open: RwSignal::new(false),
        delete_target: RwSignal::new(None),
        confirm_delete_open: RwSignal::new(false),
        columns_open: RwSignal::new(false),
        dragged_column: RwSignal::new(None),
        drag_over: RwSignal::new(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_filter_input() {
        let filter = ProductFilterInput {
            field: "BOX_SKU".into(),
            value: " BX-01 ".into(),
            created_from: "2025-01-01".into(),
            created_to: "bad".into(),
        }
        .to_filter();
        assert_eq!(filter.field, ProductSearchField::BoxSku);
        assert_eq!(filter.value, "BX-01");
        assert_eq!(filter.created_from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(filter.created_to, None);

        let fallback = ProductFilterInput::default().to_filter();
        assert_eq!(fallback.field, ProductSearchField::Upc);
    }

    #[test]
    fn test_pairing_filter() {
        let filter = build_pairing_filter(" 鼠标 ", "OFF_SALE");
        assert_eq!(filter.query, "鼠标");
        assert_eq!(filter.status, Some(PairingStatus::OffSale));
        assert_eq!(build_pairing_filter("", "").status, None);
    }

    #[test]
    fn test_save_notice() {
        let created = SaveOutcome::Created {
            id: ProductId::new_v4(),
            sku_id: "SKU-9".into(),
            pairings: 2,
        };
        assert_eq!(
            save_notice(&created),
            ("创建成功", "商品 SKU-9 已创建，并自动生成 2 条配对记录".to_string())
        );
        let updated = SaveOutcome::Updated { id: ProductId::new_v4() };
        assert_eq!(save_notice(&updated).0, "更新成功");
    }

    #[test]
    fn test_box_spec_rows_follow_columns() {
        let product = seed_products()
            .into_iter()
            .find(|p| p.box_specs.len() > 1)
            .unwrap();
        let spec = &product.box_specs[1];
        assert_eq!(box_spec_cell_text(ProductColumnId::BoxSku, &product, spec), spec.box_sku_id);
        assert_eq!(
            box_spec_cell_text(ProductColumnId::BoxSpecs, &product, spec),
            spec.pcs_per_box.to_string()
        );
        assert_eq!(box_spec_cell_text(ProductColumnId::Upc, &product, spec), product.upc);
        assert_eq!(box_spec_cell_text(ProductColumnId::Weight, &product, spec), dim(spec.weight));
        assert_eq!(box_spec_cell_text(ProductColumnId::Operator, &product, spec), "-");
        assert_eq!(box_spec_cell_text(ProductColumnId::Action, &product, spec), "");

        assert_eq!(pcs_per_box_summary(&product).matches(" / ").count(), product.box_specs.len() - 1);
        let bare = Product {
            box_specs: Vec::new(),
            ..product
        };
        assert_eq!(pcs_per_box_summary(&bare), "-");
    }

    #[test]
    fn test_pin_attrs_and_codes() {
        assert_eq!(
            pin_attrs(Some(ColumnPin::Left), 40.0),
            (
                "table__cell--pinned-left",
                "position: sticky; z-index: 1; background: inherit; left: 40px;".to_string()
            )
        );
        assert_eq!(pin_attrs(Some(ColumnPin::Right), 0.0).0, "table__cell--pinned-right");
        assert_eq!(pin_attrs(None, 10.0), ("", String::new()));

        for pin in [None, Some(ColumnPin::Left), Some(ColumnPin::Right)] {
            assert_eq!(pin_from_code(pin_code(pin)), pin);
        }
    }
}
