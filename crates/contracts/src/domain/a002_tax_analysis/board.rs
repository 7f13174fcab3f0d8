//! Контроллер страницы "数据分析": фильтры, валюта отображения, статистика,
//! примечания и выгрузка.

use super::aggregate::{TaxAnalysisRecord, TaxAnalysisRecordId};
use super::calculator::DerivedFields;
use super::currency::{convert_for_display, TaxCurrency};
use super::export::{build_export_sheet, ExportScope, ExportSheet};
use super::stats::{summarize, DestinationStats, StatsSummary};
use crate::enums::Country;
use crate::shared::config::TaxAnalysisConfig;
use crate::shared::error::{ExportError, RecordError};
use crate::shared::list::{contains_ci, ListFilter, ListPage};
use chrono::{Duration, NaiveDate, NaiveDateTime};

// ============================================================================
// Фильтр
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxAnalysisFilter {
    pub origin_countries: Vec<Country>,
    pub dest_countries: Vec<Country>,
    pub supplier_waybill_no: String,
    pub tracking_no: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TaxAnalysisFilter {
    /// Пустой фильтр с периодом "последние `days` дней"
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self {
            date_from: Some(today - Duration::days(days)),
            date_to: Some(today),
            ..Self::default()
        }
    }

    pub fn toggle_origin(&mut self, country: Country) {
        toggle_country(&mut self.origin_countries, country);
    }

    pub fn toggle_dest(&mut self, country: Country) {
        toggle_country(&mut self.dest_countries, country);
    }
}

fn toggle_country(list: &mut Vec<Country>, country: Country) {
    match list.iter().position(|c| *c == country) {
        Some(pos) => {
            list.remove(pos);
        }
        None => list.push(country),
    }
}

impl ListFilter<TaxAnalysisRecord> for TaxAnalysisFilter {
    fn matches(&self, item: &TaxAnalysisRecord) -> bool {
        let date = item.create_time.date();
        (self.origin_countries.is_empty() || self.origin_countries.contains(&item.origin_country))
            && (self.dest_countries.is_empty() || self.dest_countries.contains(&item.dest_country))
            && contains_ci(&item.supplier_waybill_no, &self.supplier_waybill_no)
            && contains_ci(&item.tracking_no, &self.tracking_no)
            && self.date_from.map_or(true, |from| date >= from)
            && self.date_to.map_or(true, |to| date <= to)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.origin_countries.is_empty())
            + usize::from(!self.dest_countries.is_empty())
            + usize::from(!self.supplier_waybill_no.trim().is_empty())
            + usize::from(!self.tracking_no.trim().is_empty())
            + usize::from(self.date_from.is_some() || self.date_to.is_some())
    }
}

// ============================================================================
// Строка таблицы
// ============================================================================

/// Суммы строки в валюте отображения
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAmounts {
    pub goods_value: f64,
    pub declared_value: f64,
    pub estimated_tax: f64,
    pub actual_tax: f64,
    pub estimated_tax_on_actual_value: f64,
    pub diff: f64,
}

/// Строка таблицы: запись, её производные показатели и пересчитанные суммы
#[derive(Debug, Clone, PartialEq)]
pub struct TaxAnalysisRow {
    pub record: TaxAnalysisRecord,
    pub derived: DerivedFields,
    pub display: DisplayAmounts,
}

// ============================================================================
// Контроллер
// ============================================================================

#[derive(Debug, Clone)]
pub struct TaxAnalysisBoard {
    /// Записи, применённый фильтр и выбор строк
    pub page: ListPage<TaxAnalysisRecord, TaxAnalysisFilter>,
    /// Условия, редактируемые в панели фильтров до нажатия "查询"
    pub draft: TaxAnalysisFilter,
    applied_destinations: Vec<Country>,
    stats_sources: Vec<DestinationStats>,
    currency: TaxCurrency,
    fx_rate: f64,
    range_days: i64,
    /// Конец периода по умолчанию
    anchor: NaiveDate,
}

/// День самой свежей записи; без записей период отсчитывается от `today`
fn range_anchor(records: &[TaxAnalysisRecord], today: NaiveDate) -> NaiveDate {
    records
        .iter()
        .map(|record| record.create_time.date())
        .max()
        .unwrap_or(today)
}

impl TaxAnalysisBoard {
    pub fn new(
        records: Vec<TaxAnalysisRecord>,
        stats_sources: Vec<DestinationStats>,
        config: &TaxAnalysisConfig,
        today: NaiveDate,
    ) -> Self {
        let anchor = range_anchor(&records, today);
        let draft = TaxAnalysisFilter::last_days(anchor, config.default_range_days);
        let mut page = ListPage::new(records);
        page.set_filter(draft.clone());
        Self {
            page,
            draft,
            applied_destinations: Vec::new(),
            stats_sources,
            currency: config.default_currency,
            fx_rate: config.fx_rate,
            range_days: config.default_range_days,
            anchor,
        }
    }

    pub fn currency(&self) -> TaxCurrency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: TaxCurrency) {
        self.currency = currency;
    }

    pub fn fx_rate(&self) -> f64 {
        self.fx_rate
    }

    /// Направления, по которым сейчас считается статистика
    pub fn applied_destinations(&self) -> &[Country] {
        &self.applied_destinations
    }

    /// "查询": применяет условия к таблице и направления к статистике
    pub fn search(&mut self) {
        self.page.set_filter(self.draft.clone());
        self.applied_destinations = self.draft.dest_countries.clone();
        log::debug!(
            "tax analysis search: {} condition(s), {} row(s)",
            self.draft.active_count(),
            self.page.visible().len()
        );
    }

    /// "重置": условия по умолчанию, статистика по всем направлениям
    pub fn reset(&mut self) {
        self.draft = TaxAnalysisFilter::last_days(self.anchor, self.range_days);
        self.page.set_filter(self.draft.clone());
        self.applied_destinations.clear();
    }

    pub fn stats(&self) -> StatsSummary {
        summarize(&self.stats_sources, &self.applied_destinations, self.fx_rate)
    }

    /// Пересчёт суммы из исходной валюты в валюту отображения
    pub fn to_display(&self, value: f64, source: TaxCurrency) -> f64 {
        convert_for_display(value, source, self.currency, self.fx_rate)
    }

    pub fn row_for(&self, record: &TaxAnalysisRecord) -> TaxAnalysisRow {
        let derived = record.derived(self.fx_rate);
        let display = DisplayAmounts {
            goods_value: self.to_display(record.goods_value, TaxCurrency::Usd),
            declared_value: self.to_display(record.declared_value, TaxCurrency::Usd),
            estimated_tax: self.to_display(record.estimated_tax, TaxCurrency::Hkd),
            actual_tax: self.to_display(record.actual_tax, TaxCurrency::Hkd),
            estimated_tax_on_actual_value: self
                .to_display(derived.estimated_tax_on_actual_value, TaxCurrency::Hkd),
            diff: self.to_display(derived.diff, TaxCurrency::Hkd),
        };
        TaxAnalysisRow {
            record: record.clone(),
            derived,
            display,
        }
    }

    /// Видимые строки с показателями в текущей валюте
    pub fn rows(&self) -> Vec<TaxAnalysisRow> {
        self.page
            .visible()
            .into_iter()
            .map(|record| self.row_for(record))
            .collect()
    }

    /// Сохраняет примечание записи
    pub fn update_remark(&mut self, id: TaxAnalysisRecordId, remark: &str) -> Result<(), RecordError> {
        self.page.update(id, |record| record.remark = remark.to_string())?;
        log::info!("remark updated for tax analysis record {}", id.0);
        Ok(())
    }

    /// Записи для выгрузки в выбранном режиме
    pub fn export_records(&self, scope: ExportScope) -> Result<Vec<&TaxAnalysisRecord>, ExportError> {
        match scope {
            ExportScope::Query => Ok(self.page.visible()),
            ExportScope::Selection => {
                let selected = self.page.selected();
                if selected.is_empty() {
                    Err(ExportError::NothingSelected)
                } else {
                    Ok(selected)
                }
            }
        }
    }

    pub fn export(&self, scope: ExportScope, now: &NaiveDateTime) -> Result<ExportSheet, ExportError> {
        let records = self.export_records(scope)?;
        build_export_sheet(&records, self.currency, self.fx_rate, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_tax_analysis::export::ExportCell;
    use crate::domain::a002_tax_analysis::seed::{seed_destination_stats, seed_records};
    use crate::shared::config::ConsoleConfig;
    use crate::shared::format::{at, day};

    fn board() -> TaxAnalysisBoard {
        let config = ConsoleConfig::load_default().unwrap();
        TaxAnalysisBoard::new(
            seed_records(),
            seed_destination_stats(),
            &config.tax_analysis,
            day(2023, 10, 20),
        )
    }

    #[test]
    fn test_defaults_from_config() {
        let b = board();
        assert_eq!(b.currency(), TaxCurrency::Hkd);
        assert_eq!(b.fx_rate(), 7.78);
        assert_eq!(b.draft.date_from, Some(day(2023, 9, 11)));
        assert_eq!(b.draft.date_to, Some(day(2023, 10, 11)));
        assert_eq!(b.page.filter(), &b.draft);
        assert_eq!(b.rows().len(), 10);
    }

    #[test]
    fn test_default_range_follows_newest_record_not_clock() {
        let config = ConsoleConfig::load_default().unwrap();
        let mut b = TaxAnalysisBoard::new(
            seed_records(),
            seed_destination_stats(),
            &config.tax_analysis,
            chrono::Local::now().date_naive(),
        );
        assert_eq!(b.draft.date_to, Some(day(2023, 10, 11)));
        assert_eq!(b.rows().len(), 10);

        b.draft.toggle_dest(Country::UnitedStates);
        b.search();
        assert_eq!(b.rows().len(), 3);
        let sheet = b.export(ExportScope::Query, &at(2025, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(sheet.rows.len(), 3);

        b.reset();
        assert_eq!(b.rows().len(), 10);
    }

    #[test]
    fn test_empty_board_anchors_on_today() {
        let config = ConsoleConfig::load_default().unwrap();
        let b = TaxAnalysisBoard::new(Vec::new(), Vec::new(), &config.tax_analysis, day(2025, 3, 31));
        assert_eq!(b.draft.date_from, Some(day(2025, 3, 1)));
        assert_eq!(b.draft.date_to, Some(day(2025, 3, 31)));
    }

    #[test]
    fn test_search_filters_rows_and_pushes_destinations_to_stats() {
        let mut b = board();
        b.draft.toggle_dest(Country::UnitedStates);
        // до "查询" ничего не меняется
        assert_eq!(b.rows().len(), 10);
        assert!(b.applied_destinations().is_empty());

        b.search();
        assert_eq!(b.rows().len(), 3);
        assert_eq!(b.applied_destinations(), &[Country::UnitedStates]);
        assert_eq!(b.stats().total_orders, 342);
    }

    #[test]
    fn test_search_by_date_range_and_waybill() {
        let mut b = board();
        b.draft.date_from = Some(day(2023, 10, 5));
        b.draft.date_to = Some(day(2023, 10, 7));
        b.search();
        assert_eq!(b.rows().len(), 3);

        b.draft.supplier_waybill_no = "sup2023006".into();
        b.search();
        let rows = b.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.merchant_order_no, "M2023006");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut b = board();
        b.draft.toggle_dest(Country::Japan);
        b.draft.tracking_no = "TRK".into();
        b.search();
        b.reset();
        assert!(b.draft.dest_countries.is_empty());
        assert!(b.draft.tracking_no.is_empty());
        assert_eq!(b.draft.date_from, Some(day(2023, 9, 11)));
        assert_eq!(b.rows().len(), 10);
        assert_eq!(b.stats().total_orders, 1437);
    }

    #[test]
    fn test_currency_toggle_converts_only_display() {
        let mut b = board();
        let hkd = b.rows()[0].clone();
        assert!((hkd.display.goods_value - 7780.0).abs() < 1e-9);
        assert!((hkd.display.actual_tax - 85.0).abs() < 1e-9);

        b.set_currency(TaxCurrency::Usd);
        let usd = b.rows()[0].clone();
        assert!((usd.display.goods_value - 1000.0).abs() < 1e-9);
        assert!((usd.display.actual_tax - 85.0 / 7.78).abs() < 1e-9);
        assert_eq!(usd.derived, hkd.derived);
        assert_eq!(usd.record, hkd.record);
    }

    #[test]
    fn test_update_remark() {
        let mut b = board();
        let id = b.page.items()[1].id;
        b.update_remark(id, "已复核").unwrap();
        assert_eq!(b.page.get(id).unwrap().remark, "已复核");

        let missing = TaxAnalysisRecordId::new(uuid::Uuid::from_u128(7));
        assert!(matches!(b.update_remark(missing, "x"), Err(RecordError::NotFound(_))));
    }

    #[test]
    fn test_selection_export_requires_selection() {
        let mut b = board();
        let now = at(2025, 1, 1, 0, 0, 0);
        assert_eq!(
            b.export(ExportScope::Selection, &now).unwrap_err(),
            ExportError::NothingSelected
        );

        let ids: Vec<_> = b.page.items().iter().skip(3).take(2).map(|r| r.id).collect();
        for id in ids {
            b.page.toggle(id);
        }
        let sheet = b.export(ExportScope::Selection, &now).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][4], ExportCell::Text("M2023004".into()));
    }

    #[test]
    fn test_query_export_uses_visible_rows() {
        let mut b = board();
        b.draft.toggle_origin(Country::Vietnam);
        b.search();
        let sheet = b.export(ExportScope::Query, &at(2025, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(sheet.rows.len(), 2);
    }
}
