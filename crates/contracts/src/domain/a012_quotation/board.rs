//! Контроллер страницы "报价管理": подтверждение предложений и генерация
//! черновика продажного предложения из закупочного.

use super::aggregate::{
    PurchaseQuote, PurchaseQuoteId, QuoteFilter, QuoteStatus, SalesQuote, SalesQuoteId,
};
use crate::shared::error::RecordError;
use crate::shared::format::round2;
use crate::shared::list::ListPage;
use chrono::NaiveDateTime;

/// Наценка на тариф перевозки в продажном предложении
pub const TRANSPORT_MARKUP: f64 = 1.2;
/// Наценка на операционный сбор
pub const OPERATION_MARKUP: f64 = 1.1;

/// Номер продажного предложения по количеству уже существующих
pub fn next_sales_quote_no(existing: usize) -> String {
    format!("S{:04}", existing + 1)
}

pub fn customer_notes_from(product_notes: &str) -> String {
    let basis = if product_notes.trim().is_empty() {
        "standard terms"
    } else {
        product_notes.trim()
    };
    format!("AI Generated Note based on {}.", basis)
}

/// Черновик продажного предложения на основе подтверждённого закупочного
pub fn draft_sales_quote(
    source: &PurchaseQuote,
    quote_no: String,
    now: NaiveDateTime,
) -> SalesQuote {
    SalesQuote {
        id: SalesQuoteId::new_v4(),
        quote_no,
        source_quote_no: source.quote_no.clone(),
        origin: source.origin.clone(),
        destination: source.destination.clone(),
        product_name: source.product_name.clone(),
        service_type: source.service_type.clone(),
        status: QuoteStatus::Draft,
        created_time: now,
        confirmed_time: None,
        kg_per_batch: source.kg_per_batch.clone(),
        transport_fee: round2(source.transport_fee * TRANSPORT_MARKUP),
        operation_fee: round2(source.operation_fee * OPERATION_MARKUP),
        tax_mode: source.tax_mode.clone(),
        cs_declared_amount: "0".to_string(),
        composite_tax_rate: "0%".to_string(),
        customer_notes: customer_notes_from(&source.product_notes),
    }
}

#[derive(Debug, Clone)]
pub struct QuotationBoard {
    pub purchase: ListPage<PurchaseQuote, QuoteFilter>,
    pub sales: ListPage<SalesQuote, QuoteFilter>,
}

impl QuotationBoard {
    pub fn new(purchase: Vec<PurchaseQuote>, sales: Vec<SalesQuote>) -> Self {
        Self {
            purchase: ListPage::new(purchase),
            sales: ListPage::new(sales),
        }
    }

    /// Подтверждает закупочное предложение и добавляет в начало списка
    /// черновик продажного. Возвращает номер нового продажного предложения.
    pub fn confirm_purchase(
        &mut self,
        id: PurchaseQuoteId,
        now: NaiveDateTime,
    ) -> Result<String, RecordError> {
        let source = self
            .purchase
            .update(id, |quote| {
                if quote.status == QuoteStatus::Confirmed {
                    return Err(RecordError::AlreadyConfirmed(quote.quote_no.clone()));
                }
                quote.status = QuoteStatus::Confirmed;
                quote.confirmed_time = Some(now);
                Ok(quote.clone())
            })??;

        let quote_no = next_sales_quote_no(self.sales.len());
        self.sales.upsert(draft_sales_quote(&source, quote_no.clone(), now));
        log::info!("purchase quote {} confirmed, sales draft {} generated", source.quote_no, quote_no);
        Ok(quote_no)
    }

    pub fn confirm_sales(&mut self, id: SalesQuoteId, now: NaiveDateTime) -> Result<(), RecordError> {
        self.sales.update(id, |quote| {
            if quote.status == QuoteStatus::Confirmed {
                return Err(RecordError::AlreadyConfirmed(quote.quote_no.clone()));
            }
            quote.status = QuoteStatus::Confirmed;
            quote.confirmed_time = Some(now);
            log::info!("sales quote {} confirmed", quote.quote_no);
            Ok(())
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a012_quotation::seed::{seed_purchase_quotes, seed_sales_quotes};
    use crate::shared::format::at;

    fn board() -> QuotationBoard {
        QuotationBoard::new(seed_purchase_quotes(), seed_sales_quotes())
    }

    #[test]
    fn test_confirm_purchase_generates_sales_draft() {
        let mut b = board();
        let now = at(2025, 2, 2, 8, 0, 0);
        let p1 = b.purchase.items()[0].id;
        let quote_no = b.confirm_purchase(p1, now).unwrap();
        assert_eq!(quote_no, "S0002");

        let confirmed = b.purchase.get(p1).unwrap();
        assert_eq!(confirmed.status, QuoteStatus::Confirmed);
        assert_eq!(confirmed.confirmed_time, Some(now));

        assert_eq!(b.sales.len(), 2);
        let draft = &b.sales.items()[0];
        assert_eq!(draft.quote_no, "S0002");
        assert_eq!(draft.source_quote_no, "P0001");
        assert_eq!(draft.status, QuoteStatus::Draft);
        assert_eq!(draft.transport_fee, 6.6);
        assert_eq!(draft.operation_fee, 2.2);
        assert_eq!(draft.kg_per_batch, "100");
        assert_eq!(draft.tax_mode, "DDP");
        assert_eq!(draft.cs_declared_amount, "0");
        assert_eq!(draft.composite_tax_rate, "0%");
        assert_eq!(
            draft.customer_notes,
            "AI Generated Note based on Ensure proper packaging for lithium batteries.."
        );
    }

    #[test]
    fn test_reconfirm_is_rejected_without_side_effects() {
        let mut b = board();
        let p2 = b.purchase.items()[1].id;
        let err = b.confirm_purchase(p2, at(2025, 2, 2, 8, 0, 0)).unwrap_err();
        assert_eq!(err, RecordError::AlreadyConfirmed("P0002".into()));
        assert_eq!(b.sales.len(), 1);
        assert_eq!(b.purchase.get(p2).unwrap().confirmed_time, Some(at(2025, 1, 29, 14, 0, 0)));
    }

    #[test]
    fn test_confirm_sales() {
        let mut b = board();
        let s1 = b.sales.items()[0].id;
        let now = at(2025, 2, 3, 12, 0, 0);
        b.confirm_sales(s1, now).unwrap();
        assert_eq!(b.sales.get(s1).unwrap().status, QuoteStatus::Confirmed);
        assert!(matches!(b.confirm_sales(s1, now), Err(RecordError::AlreadyConfirmed(_))));
    }

    #[test]
    fn test_notes_fallback() {
        assert_eq!(customer_notes_from(" "), "AI Generated Note based on standard terms.");
        assert_eq!(next_sales_quote_no(0), "S0001");
        assert_eq!(next_sales_quote_no(41), "S0042");
    }
}
