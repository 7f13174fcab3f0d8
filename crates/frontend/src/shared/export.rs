//! Выгрузка листа `ExportSheet` в CSV и скачивание через браузер.
//!
//! Ячейки-формулы записываются как `=EXPR`, табличный редактор вычисляет их
//! при открытии файла. Подсказки формата и ширины колонок CSV не переносит.

use contracts::domain::a002_tax_analysis::export::{ExportCell, ExportSheet};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const SEPARATOR: char = ',';

/// Текст CSV: BOM, строка заголовков и строки данных
pub fn sheet_to_csv(sheet: &ExportSheet) -> String {
    let mut csv_content = String::new();

    // UTF-8 BOM для корректного отображения иероглифов
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = sheet.headers.iter().map(|h| escape_csv_cell(h)).collect();
    csv_content.push_str(&headers.join(&SEPARATOR.to_string()));
    csv_content.push('\n');

    for row in &sheet.rows {
        let cells: Vec<String> = row.iter().map(cell_to_csv).collect();
        csv_content.push_str(&cells.join(&SEPARATOR.to_string()));
        csv_content.push('\n');
    }

    csv_content
}

fn cell_to_csv(cell: &ExportCell) -> String {
    match cell {
        ExportCell::Text(text) => escape_csv_cell(text),
        ExportCell::Number(value) => value.to_string(),
        ExportCell::Formula { expr, .. } => escape_csv_cell(&format!("={}", expr)),
    }
}

const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Имя скачиваемого файла для листа
pub fn csv_file_name(sheet: &ExportSheet) -> String {
    format!("{}.csv", sheet.file_name)
}

/// Экспортирует лист в CSV и инициирует скачивание
pub fn download_sheet(sheet: &ExportSheet) -> Result<(), String> {
    let file_name = csv_file_name(sheet);
    save_file(&sheet_to_csv(sheet), CSV_MIME, &file_name)?;
    log::info!("exported {} row(s) to {}", sheet.rows.len(), file_name);
    Ok(())
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

/// Object URL, отзываемый при выходе из области видимости
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_text(content: &str, mime: &str) -> Result<Self, String> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|e| format!("blob: {:?}", e))?;
        Url::create_object_url_with_blob(&blob)
            .map(ObjectUrl)
            .map_err(|e| format!("object url: {:?}", e))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Скачивание текста как файла через ссылку с атрибутом `download`;
/// в документ ссылка не вставляется
fn save_file(content: &str, mime: &str, file_name: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document is not available")?;
    let url = ObjectUrl::for_text(content, mime)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url.0);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: Vec<Vec<ExportCell>>) -> ExportSheet {
        ExportSheet {
            sheet_name: "税费分析数据".into(),
            file_name: "税费分析数据_20250210093000".into(),
            headers: vec!["快递单号".into(), "实际货值(USD)".into(), "申报比例".into()],
            column_widths: vec![15, 12, 10],
            rows,
        }
    }

    #[test]
    fn test_formulas_written_with_equals_sign() {
        let csv = sheet_to_csv(&sheet(vec![vec![
            ExportCell::Text("SF123".into()),
            ExportCell::Number(100.5),
            ExportCell::Formula {
                expr: "H2/G2".into(),
                percent: true,
            },
        ]]));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\u{FEFF}快递单号,实际货值(USD),申报比例");
        assert_eq!(lines[1], "SF123,100.5,=H2/G2");
    }

    #[test]
    fn test_text_with_separator_is_quoted() {
        let csv = sheet_to_csv(&sheet(vec![vec![
            ExportCell::Text("破损, 需要\"复核\"".into()),
            ExportCell::Number(0.0),
            ExportCell::Text(String::new()),
        ]]));
        assert_eq!(csv.lines().nth(1), Some("\"破损, 需要\"\"复核\"\"\",0,"));
    }

    #[test]
    fn test_file_name_gets_csv_extension() {
        assert_eq!(csv_file_name(&sheet(Vec::new())), "税费分析数据_20250210093000.csv");
    }
}
