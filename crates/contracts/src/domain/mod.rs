pub mod a001_logistics_order;
pub mod a002_tax_analysis;
pub mod a003_supplier;
pub mod a004_international_line;
pub mod a005_port;
pub mod a006_exchange_rate;
pub mod a007_payable_bill;
pub mod a008_receivable_bill;
pub mod a009_collection_order;
pub mod a010_batch_overview;
pub mod a011_product;
pub mod a012_quotation;
pub mod a013_inbound_parcel;
pub mod a014_outbound_batch;
pub mod common;
