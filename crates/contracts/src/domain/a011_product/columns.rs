//! Настройка колонок таблицы товаров: видимость, порядок и закрепление.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductColumnId {
    Expand,
    Image,
    SupplierId,
    Upc,
    SkuId,
    BoxSku,
    Brand,
    NameEn,
    NameCn,
    BoxSpecs,
    Weight,
    Length,
    Width,
    Height,
    Remark,
    Operator,
    CreateTime,
    UpdateTime,
    Action,
}

impl ProductColumnId {
    pub fn code(&self) -> &'static str {
        match self {
            ProductColumnId::Expand => "EXPAND",
            ProductColumnId::Image => "IMAGE",
            ProductColumnId::SupplierId => "SUPPLIER_ID",
            ProductColumnId::Upc => "UPC",
            ProductColumnId::SkuId => "SKU_ID",
            ProductColumnId::BoxSku => "BOX_SKU",
            ProductColumnId::Brand => "BRAND",
            ProductColumnId::NameEn => "NAME_EN",
            ProductColumnId::NameCn => "NAME_CN",
            ProductColumnId::BoxSpecs => "BOX_SPECS",
            ProductColumnId::Weight => "WEIGHT",
            ProductColumnId::Length => "LENGTH",
            ProductColumnId::Width => "WIDTH",
            ProductColumnId::Height => "HEIGHT",
            ProductColumnId::Remark => "REMARK",
            ProductColumnId::Operator => "OPERATOR",
            ProductColumnId::CreateTime => "CREATE_TIME",
            ProductColumnId::UpdateTime => "UPDATE_TIME",
            ProductColumnId::Action => "ACTION",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductColumnId::Expand => "展开",
            ProductColumnId::Image => "图片",
            ProductColumnId::SupplierId => "供应商标识",
            ProductColumnId::Upc => "商品条码",
            ProductColumnId::SkuId => "商品编码",
            ProductColumnId::BoxSku => "箱规编码",
            ProductColumnId::Brand => "品牌",
            ProductColumnId::NameEn => "英文商品名称",
            ProductColumnId::NameCn => "中文商品名称",
            ProductColumnId::BoxSpecs => "箱规",
            ProductColumnId::Weight => "重量/KG",
            ProductColumnId::Length => "长/CM",
            ProductColumnId::Width => "宽/CM",
            ProductColumnId::Height => "高/CM",
            ProductColumnId::Remark => "备注",
            ProductColumnId::Operator => "操作人",
            ProductColumnId::CreateTime => "创建时间",
            ProductColumnId::UpdateTime => "操作时间",
            ProductColumnId::Action => "操作",
        }
    }

    /// Минимальная ширина колонки, px
    pub fn min_width(&self) -> f64 {
        match self {
            ProductColumnId::Expand => 40.0,
            ProductColumnId::Image => 70.0,
            ProductColumnId::NameEn => 200.0,
            ProductColumnId::NameCn => 160.0,
            ProductColumnId::Upc | ProductColumnId::SkuId | ProductColumnId::BoxSku => 130.0,
            ProductColumnId::Remark => 140.0,
            ProductColumnId::CreateTime | ProductColumnId::UpdateTime => 150.0,
            ProductColumnId::Action => 120.0,
            ProductColumnId::Weight
            | ProductColumnId::Length
            | ProductColumnId::Width
            | ProductColumnId::Height
            | ProductColumnId::BoxSpecs
            | ProductColumnId::Operator => 70.0,
            ProductColumnId::SupplierId | ProductColumnId::Brand => 90.0,
        }
    }

    pub fn all() -> Vec<ProductColumnId> {
        vec![
            ProductColumnId::Expand,
            ProductColumnId::Image,
            ProductColumnId::SupplierId,
            ProductColumnId::Upc,
            ProductColumnId::SkuId,
            ProductColumnId::BoxSku,
            ProductColumnId::Brand,
            ProductColumnId::NameEn,
            ProductColumnId::NameCn,
            ProductColumnId::BoxSpecs,
            ProductColumnId::Weight,
            ProductColumnId::Length,
            ProductColumnId::Width,
            ProductColumnId::Height,
            ProductColumnId::Remark,
            ProductColumnId::Operator,
            ProductColumnId::CreateTime,
            ProductColumnId::UpdateTime,
            ProductColumnId::Action,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnPin {
    Left,
    Right,
}

impl ColumnPin {
    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnPin::Left => "左侧固定",
            ColumnPin::Right => "右侧固定",
        }
    }

    /// Метка на чипе колонки в диалоге настроек
    pub fn short_name(&self) -> &'static str {
        match self {
            ColumnPin::Left => "左",
            ColumnPin::Right => "右",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ProductColumnId,
    pub visible: bool,
    pub pinned: Option<ColumnPin>,
}

impl ColumnConfig {
    fn new(id: ProductColumnId, pinned: Option<ColumnPin>) -> Self {
        Self {
            id,
            visible: true,
            pinned,
        }
    }
}

/// Набор колонок по умолчанию: все видимы, раскрытие и картинка закреплены
/// слева, действия справа
pub fn default_columns() -> Vec<ColumnConfig> {
    ProductColumnId::all()
        .into_iter()
        .map(|id| {
            let pinned = match id {
                ProductColumnId::Expand | ProductColumnId::Image => Some(ColumnPin::Left),
                ProductColumnId::Action => Some(ColumnPin::Right),
                _ => None,
            };
            ColumnConfig::new(id, pinned)
        })
        .collect()
}

/// Порядок и видимость колонок таблицы товаров вместе с колонкой,
/// выбранной в диалоге настроек
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    columns: Vec<ColumnConfig>,
    selected: Option<ProductColumnId>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnLayout {
    pub fn new() -> Self {
        let columns = default_columns();
        let selected = columns.first().map(|c| c.id);
        Self { columns, selected }
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    /// Видимые колонки в текущем порядке
    pub fn visible(&self) -> Vec<ColumnConfig> {
        self.columns.iter().filter(|c| c.visible).copied().collect()
    }

    pub fn is_visible(&self, id: ProductColumnId) -> bool {
        self.find(id).is_some_and(|c| c.visible)
    }

    fn position(&self, id: ProductColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    fn find(&self, id: ProductColumnId) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn toggle_visible(&mut self, id: ProductColumnId) {
        if let Some(pos) = self.position(id) {
            let column = &mut self.columns[pos];
            column.visible = !column.visible;
        }
    }

    /// Сдвигает колонку на одну позицию влево; false, если двигать некуда
    pub fn move_up(&mut self, id: ProductColumnId) -> bool {
        match self.position(id) {
            Some(pos) if pos > 0 => {
                self.columns.swap(pos, pos - 1);
                true
            }
            _ => false,
        }
    }

    pub fn move_down(&mut self, id: ProductColumnId) -> bool {
        match self.position(id) {
            Some(pos) if pos + 1 < self.columns.len() => {
                self.columns.swap(pos, pos + 1);
                true
            }
            _ => false,
        }
    }

    /// Перенос колонки на позицию `to` (перетаскивание чипа)
    pub fn move_to(&mut self, id: ProductColumnId, to: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let to = to.min(self.columns.len() - 1);
        if from == to {
            return false;
        }
        let column = self.columns.remove(from);
        self.columns.insert(to, column);
        true
    }

    pub fn set_pin(&mut self, id: ProductColumnId, pin: Option<ColumnPin>) {
        if let Some(pos) = self.position(id) {
            self.columns[pos].pinned = pin;
        }
    }

    pub fn pin_of(&self, id: ProductColumnId) -> Option<ColumnPin> {
        self.find(id).and_then(|c| c.pinned)
    }

    pub fn select(&mut self, id: ProductColumnId) {
        if self.position(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn selected(&self) -> Option<ColumnConfig> {
        self.selected.and_then(|id| self.find(id).copied())
    }

    /// Отступ слева для закреплённой слева колонки: сумма ширин видимых
    /// закреплённых слева колонок перед ней
    pub fn left_offset(&self, id: ProductColumnId) -> f64 {
        let mut offset = 0.0;
        for column in &self.columns {
            if column.id == id {
                return offset;
            }
            if column.visible && column.pinned == Some(ColumnPin::Left) {
                offset += column.id.min_width();
            }
        }
        0.0
    }

    /// "重置为默认"
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(layout: &ColumnLayout) -> Vec<ProductColumnId> {
        layout.columns().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_defaults() {
        let layout = ColumnLayout::new();
        assert_eq!(layout.columns().len(), 19);
        assert_eq!(layout.visible().len(), 19);
        assert_eq!(layout.pin_of(ProductColumnId::Image), Some(ColumnPin::Left));
        assert_eq!(layout.pin_of(ProductColumnId::Action), Some(ColumnPin::Right));
        assert_eq!(layout.pin_of(ProductColumnId::Upc), None);
        assert_eq!(layout.selected().map(|c| c.id), Some(ProductColumnId::Expand));
    }

    #[test]
    fn test_toggle_hides_and_shows_column() {
        let mut layout = ColumnLayout::new();
        layout.toggle_visible(ProductColumnId::Remark);
        assert!(!layout.is_visible(ProductColumnId::Remark));
        assert_eq!(layout.visible().len(), 18);
        assert!(layout.visible().iter().all(|c| c.id != ProductColumnId::Remark));

        layout.toggle_visible(ProductColumnId::Remark);
        assert!(layout.is_visible(ProductColumnId::Remark));
    }

    #[test]
    fn test_move_up_and_down() {
        let mut layout = ColumnLayout::new();
        assert!(layout.move_up(ProductColumnId::SkuId));
        assert_eq!(order(&layout)[3], ProductColumnId::SkuId);
        assert_eq!(order(&layout)[4], ProductColumnId::Upc);

        assert!(layout.move_down(ProductColumnId::SkuId));
        assert_eq!(order(&layout), ProductColumnId::all());

        assert!(!layout.move_up(ProductColumnId::Expand));
        assert!(!layout.move_down(ProductColumnId::Action));
        assert_eq!(order(&layout), ProductColumnId::all());
    }

    #[test]
    fn test_move_to_reorders() {
        let mut layout = ColumnLayout::new();
        assert!(layout.move_to(ProductColumnId::Brand, 2));
        assert_eq!(order(&layout)[2], ProductColumnId::Brand);
        assert_eq!(order(&layout)[3], ProductColumnId::SupplierId);
        assert_eq!(order(&layout).len(), 19);

        assert!(layout.move_to(ProductColumnId::Expand, 100));
        assert_eq!(order(&layout).last(), Some(&ProductColumnId::Expand));
        assert!(!layout.move_to(ProductColumnId::Expand, 18));
    }

    #[test]
    fn test_pin_and_left_offset() {
        let mut layout = ColumnLayout::new();
        assert_eq!(layout.left_offset(ProductColumnId::Expand), 0.0);
        assert_eq!(layout.left_offset(ProductColumnId::Image), 40.0);

        layout.set_pin(ProductColumnId::SupplierId, Some(ColumnPin::Left));
        assert_eq!(layout.left_offset(ProductColumnId::SupplierId), 110.0);

        layout.toggle_visible(ProductColumnId::Image);
        assert_eq!(layout.left_offset(ProductColumnId::SupplierId), 40.0);

        layout.set_pin(ProductColumnId::Action, None);
        assert_eq!(layout.pin_of(ProductColumnId::Action), None);
    }

    #[test]
    fn test_reset_restores_default_set() {
        let mut layout = ColumnLayout::new();
        layout.toggle_visible(ProductColumnId::Brand);
        layout.move_to(ProductColumnId::Action, 0);
        layout.set_pin(ProductColumnId::Upc, Some(ColumnPin::Right));
        layout.select(ProductColumnId::Upc);

        layout.reset();
        assert_eq!(layout, ColumnLayout::new());
        assert_eq!(order(&layout), ProductColumnId::all());
    }
}
