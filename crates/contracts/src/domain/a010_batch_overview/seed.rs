use super::aggregate::{BatchOverview, BatchOverviewId, BatchStatus};
use crate::shared::format::at;
use uuid::Uuid;

pub fn seed_batches() -> Vec<BatchOverview> {
    let rows = [
        ("B20250201A", "US", 150, 50000, "FedEx", "WO2025020101", at(2025, 2, 1, 8, 0, 0), BatchStatus::Transit),
        ("B20250201B", "UK", 80, 25000, "DHL", "WO2025020102", at(2025, 2, 1, 9, 30, 0), BatchStatus::Arrived),
        ("B20250202A", "MEX", 200, 75000, "UPS", "", at(2025, 2, 2, 10, 15, 0), BatchStatus::Planning),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (batch_no, country, orders, weight, supplier, wo_code, created, status))| BatchOverview {
                id: BatchOverviewId::new(Uuid::from_u128(0xA010_0000 + i as u128 + 1)),
                batch_no: batch_no.to_string(),
                final_country: country.to_string(),
                order_count: orders,
                forecast_total_weight: weight,
                supplier_short_name: supplier.to_string(),
                warehouse_out_code: wo_code.to_string(),
                create_time: created,
                status,
            },
        )
        .collect()
}
