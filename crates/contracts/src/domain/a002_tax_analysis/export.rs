//! Табличная выгрузка "税费分析数据".
//!
//! Исходные денежные колонки (G, H, J, L) выводятся числами в валюте
//! отображения, производные колонки (I, K, M, N, O) формулами по той же строке.

use super::aggregate::TaxAnalysisRecord;
use super::currency::{convert_for_display, TaxCurrency};
use crate::shared::error::ExportError;
use crate::shared::format::{format_datetime, round2};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const SHEET_NAME: &str = "税费分析数据";

/// Какие строки выгружать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportScope {
    /// Все строки текущего запроса
    #[default]
    Query,
    /// Только отмеченные строки
    Selection,
}

impl ExportScope {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportScope::Query => "按查询条件导出",
            ExportScope::Selection => "导出选中数据",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExportCell {
    Text(String),
    Number(f64),
    /// Формула без ведущего `=`; `percent` задаёт формат формата "0.00%"
    Formula { expr: String, percent: bool },
}

impl ExportCell {
    fn formula(expr: String) -> Self {
        ExportCell::Formula {
            expr,
            percent: false,
        }
    }

    fn percent(expr: String) -> Self {
        ExportCell::Formula {
            expr,
            percent: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSheet {
    pub sheet_name: String,
    /// Имя файла без расширения
    pub file_name: String,
    pub headers: Vec<String>,
    /// Ширина колонок в символах
    pub column_widths: Vec<u16>,
    pub rows: Vec<Vec<ExportCell>>,
}

/// Заголовки колонок A–P; денежные колонки подписаны валютой
pub fn export_headers(currency: TaxCurrency) -> Vec<String> {
    let cur = currency.code();
    vec![
        "订单创建时间".to_string(),
        "起始地国家/地区".to_string(),
        "目的地国家/地区".to_string(),
        "供应商运单号".to_string(),
        "商家订单号".to_string(),
        "快递单号".to_string(),
        format!("实际货值({})", cur),
        format!("申报货值({})", cur),
        "申报比例".to_string(),
        format!("预估税费({})", cur),
        "预估税率".to_string(),
        format!("实际税费({})", cur),
        "实际税率".to_string(),
        format!("实际货值预估税费({})", cur),
        format!("对比差异({})", cur),
        "备注".to_string(),
    ]
}

const COLUMN_WIDTHS: [u16; 16] = [20, 15, 15, 15, 15, 15, 12, 12, 10, 12, 10, 12, 10, 15, 12, 20];

/// Имя файла выгрузки: "税费分析数据_yyyyMMddHHmmss"
pub fn export_file_name(now: &NaiveDateTime) -> String {
    format!("{}_{}", SHEET_NAME, now.format("%Y%m%d%H%M%S"))
}

fn export_row(record: &TaxAnalysisRecord, r: usize, currency: TaxCurrency, fx_rate: f64) -> Vec<ExportCell> {
    let money = |value: f64, source: TaxCurrency| {
        ExportCell::Number(round2(convert_for_display(value, source, currency, fx_rate)))
    };

    vec![
        ExportCell::Text(format_datetime(&record.create_time)),
        ExportCell::Text(record.origin_country.display_name().to_string()),
        ExportCell::Text(record.dest_country.display_name().to_string()),
        ExportCell::Text(record.supplier_waybill_no.clone()),
        ExportCell::Text(record.merchant_order_no.clone()),
        ExportCell::Text(record.tracking_no.clone()),
        money(record.goods_value, TaxCurrency::Usd),
        money(record.declared_value, TaxCurrency::Usd),
        ExportCell::percent(format!("H{r}/G{r}")),
        money(record.estimated_tax, TaxCurrency::Hkd),
        ExportCell::percent(format!("J{r}/H{r}")),
        money(record.actual_tax, TaxCurrency::Hkd),
        ExportCell::percent(format!("L{r}/H{r}")),
        ExportCell::formula(format!("G{r}*M{r}")),
        ExportCell::formula(format!("N{r}-L{r}")),
        ExportCell::Text(record.remark.clone()),
    ]
}

/// Строит лист выгрузки. Строка данных `i` находится в строке листа `i + 2`
/// (первая строка занята заголовками).
pub fn build_export_sheet(
    records: &[&TaxAnalysisRecord],
    currency: TaxCurrency,
    fx_rate: f64,
    now: &NaiveDateTime,
) -> Result<ExportSheet, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRows);
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| export_row(record, i + 2, currency, fx_rate))
        .collect();

    log::info!("export sheet built: {} row(s) in {}", records.len(), currency);

    Ok(ExportSheet {
        sheet_name: SHEET_NAME.to_string(),
        file_name: export_file_name(now),
        headers: export_headers(currency),
        column_widths: COLUMN_WIDTHS.to_vec(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tax_analysis::seed::seed_records;
    use crate::shared::format::at;

    const FX: f64 = 7.78;

    fn formula(cell: &ExportCell) -> (&str, bool) {
        match cell {
            ExportCell::Formula { expr, percent } => (expr.as_str(), *percent),
            other => panic!("expected formula, got {:?}", other),
        }
    }

    #[test]
    fn test_derived_columns_are_same_row_formulas() {
        let records = seed_records();
        let refs: Vec<&TaxAnalysisRecord> = records.iter().take(3).collect();
        let sheet = build_export_sheet(&refs, TaxCurrency::Hkd, FX, &at(2025, 1, 20, 10, 0, 0)).unwrap();

        assert_eq!(sheet.headers.len(), 16);
        assert_eq!(sheet.rows.len(), 3);
        for (i, row) in sheet.rows.iter().enumerate() {
            let r = i + 2;
            assert_eq!(row.len(), 16);
            assert_eq!(formula(&row[8]), (format!("H{r}/G{r}").as_str(), true));
            assert_eq!(formula(&row[10]), (format!("J{r}/H{r}").as_str(), true));
            assert_eq!(formula(&row[12]), (format!("L{r}/H{r}").as_str(), true));
            assert_eq!(formula(&row[13]), (format!("G{r}*M{r}").as_str(), false));
            assert_eq!(formula(&row[14]), (format!("N{r}-L{r}").as_str(), false));
        }
    }

    #[test]
    fn test_money_converted_to_display_currency() {
        let records = seed_records();
        let first = vec![&records[0]];
        let now = at(2025, 1, 20, 10, 0, 0);

        let hkd = build_export_sheet(&first, TaxCurrency::Hkd, FX, &now).unwrap();
        assert_eq!(hkd.rows[0][6], ExportCell::Number(7780.0));
        assert_eq!(hkd.rows[0][7], ExportCell::Number(6224.0));
        assert_eq!(hkd.rows[0][11], ExportCell::Number(85.0));

        let usd = build_export_sheet(&first, TaxCurrency::Usd, FX, &now).unwrap();
        assert_eq!(usd.rows[0][6], ExportCell::Number(1000.0));
        assert_eq!(usd.rows[0][9], ExportCell::Number(10.28));
        assert_eq!(usd.rows[0][11], ExportCell::Number(10.93));
        assert_eq!(usd.headers[6], "实际货值(USD)");
    }

    #[test]
    fn test_text_columns_and_file_name() {
        let records = seed_records();
        let first = vec![&records[0]];
        let sheet = build_export_sheet(&first, TaxCurrency::Hkd, FX, &at(2025, 3, 4, 5, 6, 7)).unwrap();
        assert_eq!(sheet.file_name, "税费分析数据_20250304050607");
        assert_eq!(sheet.sheet_name, "税费分析数据");
        assert_eq!(sheet.rows[0][0], ExportCell::Text("2023-10-01 10:00:00".into()));
        assert_eq!(sheet.rows[0][1], ExportCell::Text("中国".into()));
        assert_eq!(sheet.rows[0][2], ExportCell::Text("美国".into()));
        assert_eq!(sheet.rows[0][15], ExportCell::Text("首批测试订单".into()));
    }

    #[test]
    fn test_empty_export_is_rejected() {
        let err = build_export_sheet(&[], TaxCurrency::Hkd, FX, &at(2025, 1, 1, 0, 0, 0)).unwrap_err();
        assert_eq!(err, ExportError::NoRows);
    }
}
