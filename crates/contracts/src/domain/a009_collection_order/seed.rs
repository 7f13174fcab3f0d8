use super::aggregate::{CollectionOrder, CollectionOrderId, CollectionStatus};
use crate::shared::format::at;
use uuid::Uuid;

pub fn seed_collection_orders() -> Vec<CollectionOrder> {
    let rows = [
        ("L20250201001", "C001", "S001", "SF123456789", at(2025, 2, 1, 10, 0, 0), CollectionStatus::Collected, "US"),
        ("L20250201002", "C002", "S002", "YT987654321", at(2025, 2, 2, 11, 30, 0), CollectionStatus::Pending, "UK"),
        ("L20250201003", "C001", "S001", "JD112233445", at(2025, 2, 3, 9, 15, 0), CollectionStatus::Cancelled, "US"),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (order_no, consignor, supplier, express, created, status, country))| CollectionOrder {
                id: CollectionOrderId::new(Uuid::from_u128(0xA009_0000 + i as u128 + 1)),
                logistics_order_no: order_no.to_string(),
                consignor_id: consignor.to_string(),
                supplier_id: supplier.to_string(),
                express_no: express.to_string(),
                create_time: created,
                status,
                final_country: country.to_string(),
            },
        )
        .collect()
}
