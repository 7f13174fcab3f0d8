use super::aggregate::{TaxAnalysisRecord, TaxAnalysisRecordId};
use super::stats::DestinationStats;
use crate::enums::Country;
use crate::shared::format::at;
use uuid::Uuid;

/// Демонстрационные записи страницы "数据分析"
pub fn seed_records() -> Vec<TaxAnalysisRecord> {
    use Country::*;

    let rows = [
        (at(2023, 10, 1, 10, 0, 0), China, UnitedStates, 1000.00, 800.00, 80.00, 85.00, "首批测试订单"),
        (at(2023, 10, 2, 14, 30, 0), China, UnitedKingdom, 2000.00, 1800.00, 360.00, 360.00, ""),
        (at(2023, 10, 3, 9, 15, 0), Vietnam, Germany, 1500.00, 1500.00, 285.00, 300.00, "需关注清关状态"),
        (at(2023, 10, 5, 16, 20, 0), China, France, 800.00, 1000.00, 100.00, 120.00, "差异为负数测试"),
        (at(2023, 10, 6, 11, 10, 0), UnitedStates, Japan, 1200.00, 1100.00, 110.00, 105.00, "电子产品"),
        (at(2023, 10, 7, 13, 45, 0), Germany, China, 3000.00, 2800.00, 420.00, 400.00, "精密仪器"),
        (at(2023, 10, 8, 15, 20, 0), UnitedKingdom, UnitedStates, 500.00, 500.00, 50.00, 48.00, "服装样品"),
        (at(2023, 10, 9, 9, 30, 0), Japan, China, 2500.00, 2400.00, 240.00, 230.00, "化妆品"),
        (at(2023, 10, 10, 10, 50, 0), Vietnam, UnitedStates, 1800.00, 1600.00, 160.00, 170.00, "家具配件"),
        (at(2023, 10, 11, 14, 15, 0), China, Germany, 4000.00, 3800.00, 570.00, 600.00, "大宗货物"),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (create_time, origin, dest, goods, declared, est_tax, actual_tax, remark))| {
                let n = i + 1;
                TaxAnalysisRecord {
                    id: TaxAnalysisRecordId::new(Uuid::from_u128(0xA002_0000 + n as u128)),
                    create_time,
                    origin_country: origin,
                    dest_country: dest,
                    supplier_waybill_no: format!("SUP2023{:03}", n),
                    merchant_order_no: format!("M2023{:03}", n),
                    tracking_no: format!("TRK888{:03}", n),
                    goods_value: goods,
                    declared_value: declared,
                    estimated_tax: est_tax,
                    actual_tax,
                    remark: remark.to_string(),
                }
            },
        )
        .collect()
}

/// Сводные показатели по направлениям для панели статистики
pub fn seed_destination_stats() -> Vec<DestinationStats> {
    let rows = [
        (Country::China, 450, 15500.00, 13500.00, 10900.00),
        (Country::UnitedStates, 342, 12500.00, 11000.00, 9350.00),
        (Country::UnitedKingdom, 256, 9800.00, 8500.00, 7400.00),
        (Country::Germany, 189, 7500.00, 7000.00, 6200.00),
        (Country::Vietnam, 120, 4000.00, 3800.00, 3250.00),
        (Country::Japan, 80, 3000.00, 2800.00, 2350.00),
    ];

    rows.into_iter()
        .map(|(country, total_orders, goods_value, declared_value, actual_tax)| DestinationStats {
            country,
            total_orders,
            goods_value,
            declared_value,
            actual_tax,
        })
        .collect()
}
