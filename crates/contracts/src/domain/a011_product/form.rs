//! Данные диалога "新增/编辑商品" в виде строк полей ввода

use super::aggregate::{BoxSpec, Product, ProductId};
use crate::shared::error::RecordError;
use crate::shared::format::{parse_amount, round2};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSpecForm {
    pub box_sku_id: String,
    pub pcs_per_box: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
}

impl BoxSpecForm {
    pub fn from_spec(spec: &BoxSpec) -> Self {
        Self {
            box_sku_id: spec.box_sku_id.clone(),
            pcs_per_box: spec.pcs_per_box.to_string(),
            length: spec.length.to_string(),
            width: spec.width.to_string(),
            height: spec.height.to_string(),
            weight: spec.weight.to_string(),
        }
    }

    pub fn to_spec(&self) -> BoxSpec {
        BoxSpec {
            box_sku_id: self.box_sku_id.trim().to_string(),
            pcs_per_box: self.pcs_per_box.trim().parse::<u32>().unwrap_or(0),
            length: dimension(&self.length),
            width: dimension(&self.width),
            height: dimension(&self.height),
            weight: dimension(&self.weight),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    /// `None` для нового товара
    pub id: Option<ProductId>,
    pub supplier_id: String,
    pub sku_id: String,
    pub upc: String,
    pub brand: String,
    pub name_en: String,
    pub name_cn: String,
    pub image_url: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub weight: String,
    pub remark: String,
    pub box_specs: Vec<BoxSpecForm>,
}

/// Габарит из поля ввода: два знака после запятой, нечисловое значение даёт 0
fn dimension(input: &str) -> f64 {
    round2(parse_amount(input))
}

impl ProductForm {
    /// Пустая форма нового товара: поставщик "YS" и одна пустая строка "箱规"
    pub fn blank() -> Self {
        Self {
            supplier_id: "YS".to_string(),
            box_specs: vec![BoxSpecForm::default()],
            ..Default::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            supplier_id: product.supplier_id.clone(),
            sku_id: product.sku_id.clone(),
            upc: product.upc.clone(),
            brand: product.brand.clone(),
            name_en: product.name_en.clone(),
            name_cn: product.name_cn.clone(),
            image_url: product.image_url.clone(),
            length: product.length.to_string(),
            width: product.width.to_string(),
            height: product.height.to_string(),
            weight: product.weight.to_string(),
            remark: product.remark.clone(),
            box_specs: product.box_specs.iter().map(BoxSpecForm::from_spec).collect(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn add_box_spec_row(&mut self) {
        self.box_specs.push(BoxSpecForm::default());
    }

    pub fn remove_box_spec_row(&mut self, index: usize) {
        if index < self.box_specs.len() {
            self.box_specs.remove(index);
        }
    }

    /// Проверка обязательных полей
    pub fn validate_required(&self) -> Result<(), RecordError> {
        let required = [
            &self.supplier_id,
            &self.upc,
            &self.sku_id,
            &self.name_en,
            &self.name_cn,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(RecordError::Validation(
                "供应商、商品条码、商品编码、中文名、英文名为必填项".to_string(),
            ));
        }
        Ok(())
    }

    /// Собирает запись товара; габариты округляются до двух знаков
    pub fn to_product(
        &self,
        id: ProductId,
        operator: &str,
        create_time: NaiveDateTime,
        update_time: NaiveDateTime,
    ) -> Product {
        Product {
            id,
            supplier_id: self.supplier_id.trim().to_string(),
            sku_id: self.sku_id.trim().to_string(),
            upc: self.upc.trim().to_string(),
            brand: self.brand.trim().to_string(),
            name_en: self.name_en.trim().to_string(),
            name_cn: self.name_cn.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            length: dimension(&self.length),
            width: dimension(&self.width),
            height: dimension(&self.height),
            weight: dimension(&self.weight),
            remark: self.remark.clone(),
            operator: operator.to_string(),
            create_time,
            update_time,
            box_specs: self.box_specs.iter().map(BoxSpecForm::to_spec).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::format::at;
    use uuid::Uuid;

    #[test]
    fn test_required_fields() {
        let mut form = ProductForm::blank();
        assert!(matches!(form.validate_required(), Err(RecordError::Validation(_))));
        form.upc = "UPC1".into();
        form.sku_id = "SKU1".into();
        form.name_en = "Mouse".into();
        form.name_cn = "   ".into();
        assert!(form.validate_required().is_err());
        form.name_cn = "鼠标".into();
        assert!(form.validate_required().is_ok());
    }

    #[test]
    fn test_dimensions_are_rounded_and_sanitized() {
        let mut form = ProductForm::blank();
        form.length = "12.346".into();
        form.width = "abc".into();
        form.height = "".into();
        form.weight = "0.126".into();
        form.box_specs[0].pcs_per_box = "x".into();
        form.box_specs[0].length = "40.004".into();
        let now = at(2025, 10, 14, 8, 0, 0);
        let product = form.to_product(ProductId::new(Uuid::from_u128(1)), "Admin", now, now);
        assert_eq!(product.length, 12.35);
        assert_eq!(product.width, 0.0);
        assert_eq!(product.height, 0.0);
        assert_eq!(product.weight, 0.13);
        assert_eq!(product.box_specs[0].pcs_per_box, 0);
        assert_eq!(product.box_specs[0].length, 40.0);
    }

    #[test]
    fn test_box_spec_rows() {
        let mut form = ProductForm::blank();
        form.add_box_spec_row();
        assert_eq!(form.box_specs.len(), 2);
        form.remove_box_spec_row(5);
        form.remove_box_spec_row(0);
        assert_eq!(form.box_specs.len(), 1);
    }
}
