use super::aggregate::{InboundParcel, InboundParcelId, InboundStatus};
use crate::enums::WarehouseKind;
use crate::shared::format::at;
use uuid::Uuid;

const SZ_ADDRESS: &str = "中国内地广东省深圳市宝安区石岩街道罗租社区金霆产业园A栋108室";

pub fn seed_inbound_parcels() -> Vec<InboundParcel> {
    let rows = [
        (WarehouseKind::Forwarder, "JYM188049022073", 6.1, InboundStatus::Outbound, "中国香港陆运LZOUW1L2", at(2026, 2, 4, 10, 30, 0), "HKG"),
        (WarehouseKind::Forwarder, "773404127268477", 1.51, InboundStatus::Outbound, "中国香港陆运LZOUW1L2", at(2026, 2, 4, 11, 20, 0), "HKG"),
        (WarehouseKind::Forwarder, "78978935517201", 0.1, InboundStatus::Outbound, "中国香港陆运LZOUW1L2", at(2026, 2, 4, 14, 15, 0), "HKG"),
        (WarehouseKind::Front, "SF1402857736211", 2.35, InboundStatus::Inbound, "中国香港陆运LZOUW1L2", at(2026, 2, 5, 9, 40, 0), "HKG"),
        (WarehouseKind::Front, "1Z999AA10123456784", 12.8, InboundStatus::Inbound, "美国空运专线", at(2026, 2, 5, 16, 5, 0), "USA"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (kind, tracking, weight, status, route, inbound, dest))| InboundParcel {
            id: InboundParcelId::new(Uuid::from_u128(0xA013_0000 + i as u128 + 1)),
            warehouse_kind: kind,
            source: "B端".to_string(),
            customer_name: "Aman".to_string(),
            customer_code: "Y8A3".to_string(),
            tracking_no: tracking.to_string(),
            weight,
            status,
            warehouse_name: "深圳光锥".to_string(),
            route: route.to_string(),
            address: SZ_ADDRESS.to_string(),
            contact: "Jason".to_string(),
            phone: "15914048579".to_string(),
            is_unpacked: false,
            inbound_time: inbound,
            destination: dest.to_string(),
        })
        .collect()
}
