use crate::shared::list_utils::pick_by_code;
use contracts::domain::a012_quotation::aggregate::{
    PurchaseQuoteId, QuoteFilter, QuoteStatus, SalesQuoteId,
};
use contracts::domain::a012_quotation::board::QuotationBoard;
use contracts::domain::a012_quotation::seed::{seed_purchase_quotes, seed_sales_quotes};
use contracts::shared::error::RecordError;
use contracts::shared::format::{format_datetime, format_money};
use chrono::NaiveDateTime;
use leptos::prelude::*;

pub const TAB_PURCHASE: &str = "purchase";
pub const TAB_SALES: &str = "sales";

pub fn build_filter(query: &str, status: &str) -> QuoteFilter {
    QuoteFilter {
        query: query.trim().to_string(),
        status: pick_by_code(QuoteStatus::all(), status, |s| s.code()),
    }
}

/// Ссылка на предложение одной из вкладок
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuoteRef {
    Purchase(PurchaseQuoteId),
    Sales(SalesQuoteId),
}

impl QuoteRef {
    /// Текст диалога подтверждения; `None`, если предложения уже нет
    pub fn confirm_message(&self, board: &QuotationBoard) -> Option<String> {
        match self {
            QuoteRef::Purchase(id) => board.purchase.get(*id).map(|q| {
                format!("确认采购报价 {} 后将自动生成销售报价草稿，是否继续？", q.quote_no)
            }),
            QuoteRef::Sales(id) => board
                .sales
                .get(*id)
                .map(|q| format!("确认销售报价 {} 吗？确认后报价生效。", q.quote_no)),
        }
    }

    /// Подтверждает предложение; возвращает заголовок и текст уведомления
    pub fn confirm(
        &self,
        board: &mut QuotationBoard,
        now: NaiveDateTime,
    ) -> Result<(&'static str, String), RecordError> {
        match self {
            QuoteRef::Purchase(id) => board.confirm_purchase(*id, now).map(|quote_no| {
                (
                    "采购报价已确认",
                    format!("状态已更新，并自动生成销售报价草稿: {}", quote_no),
                )
            }),
            QuoteRef::Sales(id) => {
                board.confirm_sales(*id, now)?;
                let quote_no = board
                    .sales
                    .get(*id)
                    .map(|q| q.quote_no.clone())
                    .unwrap_or_default();
                Ok(("销售报价已确认", format!("销售报价 {} 已生效", quote_no)))
            }
        }
    }

    /// Поля карточки "报价详情"
    pub fn detail_fields(&self, board: &QuotationBoard) -> Option<Vec<(&'static str, String)>> {
        let confirmed = |time: Option<NaiveDateTime>| {
            time.map(|t| format_datetime(&t)).unwrap_or_else(|| "-".to_string())
        };
        match self {
            QuoteRef::Purchase(id) => board.purchase.get(*id).map(|q| {
                vec![
                    ("单号", q.quote_no.clone()),
                    ("供应商", q.supplier.clone()),
                    ("路线", format!("{} → {}", q.origin, q.destination)),
                    ("品名", q.product_name.clone()),
                    ("服务类型", q.service_type.clone()),
                    ("每批重量/KG", q.kg_per_batch.clone()),
                    ("运费/KG", format!("{} {}", q.currency.code(), format_money(q.transport_fee))),
                    ("操作费", format_money(q.operation_fee)),
                    ("税务模式", q.tax_mode.clone()),
                    ("状态", q.status.display_name().to_string()),
                    ("创建时间", format_datetime(&q.created_time)),
                    ("确认时间", confirmed(q.confirmed_time)),
                    ("产品备注", q.product_notes.clone()),
                ]
            }),
            QuoteRef::Sales(id) => board.sales.get(*id).map(|q| {
                vec![
                    ("单号", q.quote_no.clone()),
                    ("源采购单", q.source_quote_no.clone()),
                    ("路线", format!("{} → {}", q.origin, q.destination)),
                    ("品名", q.product_name.clone()),
                    ("服务类型", q.service_type.clone()),
                    ("每批重量/KG", q.kg_per_batch.clone()),
                    ("运费/KG", format_money(q.transport_fee)),
                    ("操作费", format_money(q.operation_fee)),
                    ("税务模式", q.tax_mode.clone()),
                    ("申报金额", q.cs_declared_amount.clone()),
                    ("综合税率", q.composite_tax_rate.clone()),
                    ("状态", q.status.display_name().to_string()),
                    ("创建时间", format_datetime(&q.created_time)),
                    ("确认时间", confirmed(q.confirmed_time)),
                    ("客户备注", q.customer_notes.clone()),
                ]
            }),
        }
    }
}

#[derive(Clone, Copy)]
pub struct QuotationListState {
    pub board: RwSignal<QuotationBoard>,
    pub tab: RwSignal<String>,
    pub purchase_query: RwSignal<String>,
    pub purchase_status: RwSignal<String>,
    pub sales_query: RwSignal<String>,
    pub sales_status: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub confirm_target: RwSignal<Option<QuoteRef>>,
    pub confirm_open: RwSignal<bool>,
    pub detail_target: RwSignal<Option<QuoteRef>>,
    pub detail_open: RwSignal<bool>,
}

impl QuotationListState {
    pub fn ask_confirm(&self, target: QuoteRef) {
        self.confirm_target.set(Some(target));
        self.confirm_open.set(true);
    }

    pub fn show_detail(&self, target: QuoteRef) {
        self.detail_target.set(Some(target));
        self.detail_open.set(true);
    }
}

pub fn create_state() -> QuotationListState {
    QuotationListState {
        board: RwSignal::new(QuotationBoard::new(seed_purchase_quotes(), seed_sales_quotes())),
        tab: RwSignal::new(TAB_PURCHASE.to_string()),
        purchase_query: RwSignal::new(String::new()),
        purchase_status: RwSignal::new(String::new()),
        sales_query: RwSignal::new(String::new()),
        sales_status: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
        confirm_target: RwSignal::new(None),
        confirm_open: RwSignal::new(false),
        detail_target: RwSignal::new(None),
        detail_open: RwSignal::new(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_filter() {
        let filter = build_filter(" p0001 ", "DRAFT");
        assert_eq!(filter.query, "p0001");
        assert_eq!(filter.status, Some(QuoteStatus::Draft));
        assert_eq!(build_filter("", "").status, None);
    }

    #[test]
    fn test_confirm_purchase_then_reject_repeat() {
        let mut board = QuotationBoard::new(seed_purchase_quotes(), seed_sales_quotes());
        let target = QuoteRef::Purchase(board.purchase.items()[0].id);
        assert_eq!(
            target.confirm_message(&board).as_deref(),
            Some("确认采购报价 P0001 后将自动生成销售报价草稿，是否继续？")
        );

        let now = NaiveDate::from_ymd_opt(2025, 2, 2)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap();
        let (title, text) = target.confirm(&mut board, now).unwrap();
        assert_eq!(title, "采购报价已确认");
        assert_eq!(text, "状态已更新，并自动生成销售报价草稿: S0002");
        assert!(matches!(
            target.confirm(&mut board, now),
            Err(RecordError::AlreadyConfirmed(_))
        ));

        let draft = QuoteRef::Sales(board.sales.items()[0].id);
        let (_, text) = draft.confirm(&mut board, now).unwrap();
        assert_eq!(text, "销售报价 S0002 已生效");
    }

    #[test]
    fn test_detail_fields() {
        let board = QuotationBoard::new(seed_purchase_quotes(), seed_sales_quotes());
        let fields = QuoteRef::Purchase(board.purchase.items()[1].id)
            .detail_fields(&board)
            .unwrap();
        assert!(fields.contains(&("路线", "Vietnam → UK".to_string())));
        assert!(fields.contains(&("确认时间", "2025-01-29 14:00:00".to_string())));

        let sales = QuoteRef::Sales(board.sales.items()[0].id)
            .detail_fields(&board)
            .unwrap();
        assert!(sales.contains(&("确认时间", "-".to_string())));
    }
}
