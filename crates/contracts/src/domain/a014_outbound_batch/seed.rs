use super::aggregate::{OutboundBatch, OutboundBatchId, OutboundStatus};
use crate::enums::WarehouseKind;
use crate::shared::format::at;
use uuid::Uuid;

pub fn seed_outbound_batches() -> Vec<OutboundBatch> {
    let rows = [
        (
            WarehouseKind::Forwarder, "20260204_2", "773404127268477", (1, 28, 28), (470.56, 470.56, 1381.0),
            86, 86301.61, "GZSCM20260203-78", OutboundStatus::Outbound, "HKG", "UPS", false,
            at(2026, 2, 4, 15, 31, 11), "中国香港陆运LZOUW1L2",
        ),
        (
            WarehouseKind::Forwarder, "20260204_1", "773404127268478", (1, 1, 9), (233.8, 233.8, 258.0),
            9, 775.86, "ZA20260205-51", OutboundStatus::Transporting, "ZAF", "BUFFALO (ZA)", true,
            at(2026, 2, 4, 9, 22, 10), "南非空运专线",
        ),
        (
            WarehouseKind::Front, "20260205_1", "SF1402857736211", (2, 3, 12), (58.4, 59.0, 0.42),
            37, 12480.0, "HK20260205-07", OutboundStatus::Arrived, "HKG", "SF Express", true,
            at(2026, 2, 5, 18, 0, 0), "中国香港陆运LZOUW1L2",
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (kind, batch_no, tracking, counts, weights, packages, value, supplier_tracking, status, dest, carrier, pre_report, outbound, route))| {
                OutboundBatch {
                    id: OutboundBatchId::new(Uuid::from_u128(0xA014_0000 + i as u128 + 1)),
                    warehouse_kind: kind,
                    batch_no: batch_no.to_string(),
                    tracking_no: tracking.to_string(),
                    customer_count: counts.0,
                    pallet_count: counts.1,
                    box_count: counts.2,
                    outbound_weight: weights.0,
                    inbound_weight: weights.1,
                    volume: weights.2,
                    package_count: packages,
                    total_value: value,
                    supplier_tracking_no: supplier_tracking.to_string(),
                    status,
                    destination: dest.to_string(),
                    carrier: carrier.to_string(),
                    pre_report_success: pre_report,
                    actual_outbound_time: outbound,
                    warehouse_name: "深圳光锥".to_string(),
                    route: route.to_string(),
                }
            },
        )
        .collect()
}
