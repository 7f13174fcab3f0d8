use contracts::domain::a002_tax_analysis::aggregate::TaxAnalysisRecordId;
use contracts::domain::a002_tax_analysis::board::{TaxAnalysisBoard, TaxAnalysisFilter};
use contracts::domain::a002_tax_analysis::seed::{seed_destination_stats, seed_records};
use contracts::enums::Country;
use contracts::shared::config::TaxAnalysisConfig;
use contracts::shared::format::{format_date, parse_date};
use chrono::{NaiveDate, NaiveDateTime};
use leptos::prelude::*;

/// Текстовые поля панели фильтров; страны переключаются прямо в черновике
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInputs {
    pub supplier_waybill_no: String,
    pub tracking_no: String,
    pub date_from: String,
    pub date_to: String,
}

impl TextInputs {
    pub fn from_draft(draft: &TaxAnalysisFilter) -> Self {
        Self {
            supplier_waybill_no: draft.supplier_waybill_no.clone(),
            tracking_no: draft.tracking_no.clone(),
            date_from: draft.date_from.as_ref().map(format_date).unwrap_or_default(),
            date_to: draft.date_to.as_ref().map(format_date).unwrap_or_default(),
        }
    }

    pub fn apply_to(&self, draft: &mut TaxAnalysisFilter) {
        draft.supplier_waybill_no = self.supplier_waybill_no.trim().to_string();
        draft.tracking_no = self.tracking_no.trim().to_string();
        draft.date_from = parse_date(&self.date_from);
        draft.date_to = parse_date(&self.date_to);
    }
}

/// Подпись к статистике: выбранные направления или "全部目的国"
pub fn destinations_label(countries: &[Country]) -> String {
    if countries.is_empty() {
        "全部目的国".to_string()
    } else {
        countries
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join("、")
    }
}

pub fn today() -> NaiveDate {
    now().date()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[derive(Clone, Copy)]
pub struct TaxAnalysisListState {
    pub board: RwSignal<TaxAnalysisBoard>,
    pub currency: RwSignal<String>,
    pub supplier_waybill_no: RwSignal<String>,
    pub tracking_no: RwSignal<String>,
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub remark_open: RwSignal<bool>,
    pub remark_target: RwSignal<Option<TaxAnalysisRecordId>>,
    pub remark_text: RwSignal<String>,
    pub export_open: RwSignal<bool>,
}

impl TaxAnalysisListState {
    fn text_inputs(&self) -> TextInputs {
        TextInputs {
            supplier_waybill_no: self.supplier_waybill_no.get_untracked(),
            tracking_no: self.tracking_no.get_untracked(),
            date_from: self.date_from.get_untracked(),
            date_to: self.date_to.get_untracked(),
        }
    }

    fn load_inputs(&self, inputs: TextInputs) {
        self.supplier_waybill_no.set(inputs.supplier_waybill_no);
        self.tracking_no.set(inputs.tracking_no);
        self.date_from.set(inputs.date_from);
        self.date_to.set(inputs.date_to);
    }

    pub fn search(&self) {
        let inputs = self.text_inputs();
        self.board.update(|b| {
            inputs.apply_to(&mut b.draft);
            b.search();
        });
    }

    pub fn reset(&self) {
        self.board.update(|b| b.reset());
        let inputs = self.board.with_untracked(|b| TextInputs::from_draft(&b.draft));
        self.load_inputs(inputs);
    }

    pub fn open_remark(&self, id: TaxAnalysisRecordId, current: String) {
        self.remark_target.set(Some(id));
        self.remark_text.set(current);
        self.remark_open.set(true);
    }
}

pub fn create_state(config: &TaxAnalysisConfig) -> TaxAnalysisListState {
    let board = TaxAnalysisBoard::new(seed_records(), seed_destination_stats(), config, today());
    let inputs = TextInputs::from_draft(&board.draft);
    let currency = board.currency().code().to_string();

    TaxAnalysisListState {
        board: RwSignal::new(board),
        currency: RwSignal::new(currency),
        supplier_waybill_no: RwSignal::new(inputs.supplier_waybill_no),
        tracking_no: RwSignal::new(inputs.tracking_no),
        date_from: RwSignal::new(inputs.date_from),
        date_to: RwSignal::new(inputs.date_to),
        is_filter_expanded: RwSignal::new(true),
        remark_open: RwSignal::new(false),
        remark_target: RwSignal::new(None),
        remark_text: RwSignal::new(String::new()),
        export_open: RwSignal::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_inputs_round_trip_through_draft() {
        let draft = TaxAnalysisFilter::last_days(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(), 30);
        let inputs = TextInputs::from_draft(&draft);
        assert_eq!(inputs.date_from, "2025-01-01");
        assert_eq!(inputs.date_to, "2025-01-31");

        let mut edited = draft.clone();
        TextInputs {
            supplier_waybill_no: " SW-1 ".into(),
            date_from: String::new(),
            ..inputs
        }
        .apply_to(&mut edited);
        assert_eq!(edited.supplier_waybill_no, "SW-1");
        assert_eq!(edited.date_from, None);
        assert_eq!(edited.date_to, draft.date_to);
    }

    #[test]
    fn test_destinations_label() {
        assert_eq!(destinations_label(&[]), "全部目的国");
        assert_eq!(
            destinations_label(&[Country::UnitedStates, Country::Japan]),
            "美国、日本"
        );
    }
}
