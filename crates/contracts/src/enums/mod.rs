pub mod country;
pub mod currency;
pub mod record_status;
pub mod warehouse_kind;

pub use country::Country;
pub use currency::Currency;
pub use record_status::RecordStatus;
pub use warehouse_kind::WarehouseKind;
