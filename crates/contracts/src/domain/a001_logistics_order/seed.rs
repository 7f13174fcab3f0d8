use super::aggregate::{Channel, LogisticsOrder, LogisticsOrderId, OrderStatus, WmsSyncStatus};
use crate::shared::format::at;
use uuid::Uuid;

/// Демонстрационные заказы страницы "国际物流订单"
pub fn seed_orders() -> Vec<LogisticsOrder> {
    use Channel::*;
    use OrderStatus::*;
    use WmsSyncStatus::*;

    let rows = [
        ("M20250120001", OverseasWarehouse, "Acme Corp", "US", at(2025, 1, 20, 10, 0, 0), 150.00, Lightcone, Synced),
        ("M20250120002", LastMileDelivery, "Globex", "UK", at(2025, 1, 19, 14, 30, 0), 230.50, Other, Pending),
        ("M20250120003", PendingPickup, "Soylent", "CA", at(2025, 1, 20, 9, 15, 0), 89.99, Other, Failed),
        ("M20250120004", Completed, "Initech", "US", at(2025, 1, 18, 11, 20, 0), 450.00, Lightcone, Synced),
        ("M20250120005", OverseasWarehouse, "Umbrella", "DE", at(2025, 1, 19, 16, 45, 0), 1200.00, Other, Pending),
        ("M20250120006", LastMileDelivery, "Stark Ind", "US", at(2025, 1, 19, 9, 0, 0), 3300.00, Lightcone, Synced),
        ("M20250120007", PendingPickup, "Wayne Ent", "UK", at(2025, 1, 20, 8, 30, 0), 560.00, Other, Pending),
        ("M20250120008", Cancelled, "Cyberdyne", "JP", at(2025, 1, 15, 10, 0, 0), 0.00, Other, Pending),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (order_no, status, customer, destination, create_time, amount, channel, wms))| {
                LogisticsOrder {
                    id: LogisticsOrderId::new(Uuid::from_u128(0xA001_0000 + i as u128 + 1)),
                    order_no: order_no.to_string(),
                    status,
                    customer_name: customer.to_string(),
                    destination: destination.to_string(),
                    create_time,
                    amount,
                    channel,
                    wms_sync_status: wms,
                }
            },
        )
        .collect()
}
