use super::aggregate::{PurchaseQuote, PurchaseQuoteId, QuoteStatus, SalesQuote, SalesQuoteId};
use crate::enums::Currency;
use crate::shared::format::at;
use uuid::Uuid;

pub fn seed_purchase_quotes() -> Vec<PurchaseQuote> {
    vec![
        PurchaseQuote {
            id: PurchaseQuoteId::new(Uuid::from_u128(0xA012_0001)),
            quote_no: "P0001".to_string(),
            supplier: "ABC Logistics".to_string(),
            origin: "China".to_string(),
            destination: "USA".to_string(),
            product_name: "Electronics".to_string(),
            service_type: "B2B".to_string(),
            status: QuoteStatus::Draft,
            created_time: at(2025, 2, 1, 10, 0, 0),
            confirmed_time: None,
            kg_per_batch: "100".to_string(),
            transport_fee: 5.5,
            operation_fee: 2.0,
            tax_mode: "DDP".to_string(),
            currency: Currency::Usd,
            product_notes: "Ensure proper packaging for lithium batteries.".to_string(),
        },
        PurchaseQuote {
            id: PurchaseQuoteId::new(Uuid::from_u128(0xA012_0002)),
            quote_no: "P0002".to_string(),
            supplier: "XYZ Shipping".to_string(),
            origin: "Vietnam".to_string(),
            destination: "UK".to_string(),
            product_name: "Textiles".to_string(),
            service_type: "B2C".to_string(),
            status: QuoteStatus::Confirmed,
            created_time: at(2025, 1, 28, 9, 0, 0),
            confirmed_time: Some(at(2025, 1, 29, 14, 0, 0)),
            kg_per_batch: "500".to_string(),
            transport_fee: 3.2,
            operation_fee: 1.5,
            tax_mode: "DDU".to_string(),
            currency: Currency::Gbp,
            product_notes: "Standard shipping.".to_string(),
        },
    ]
}

pub fn seed_sales_quotes() -> Vec<SalesQuote> {
    vec![SalesQuote {
        id: SalesQuoteId::new(Uuid::from_u128(0xA012_1001)),
        quote_no: "S0001".to_string(),
        source_quote_no: "P0002".to_string(),
        origin: "Vietnam".to_string(),
        destination: "UK".to_string(),
        product_name: "Textiles".to_string(),
        service_type: "B2C".to_string(),
        status: QuoteStatus::Draft,
        created_time: at(2025, 1, 29, 14, 5, 0),
        confirmed_time: None,
        kg_per_batch: "500".to_string(),
        transport_fee: 4.5,
        operation_fee: 2.0,
        tax_mode: "DDU".to_string(),
        cs_declared_amount: "5000".to_string(),
        composite_tax_rate: "20%".to_string(),
        customer_notes: "Estimated delivery: 15-20 days.".to_string(),
    }]
}
