use super::aggregate::{PayableBill, PayableBillId, PayableStatus};
use crate::enums::Currency;
use crate::shared::format::day;
use uuid::Uuid;

pub fn seed_payable_bills() -> Vec<PayableBill> {
    let rows = [
        ("PB20250201001", "FedEx Logistics", 1500.00, Currency::Usd, PayableStatus::Pending, day(2025, 2, 1), day(2025, 2, 15)),
        ("PB20250120002", "DHL Express", 2300.50, Currency::Usd, PayableStatus::Paid, day(2025, 1, 20), day(2025, 2, 5)),
        ("PB20250110003", "Shenzhen Warehouse Co.", 800.00, Currency::Cny, PayableStatus::Partial, day(2025, 1, 10), day(2025, 1, 25)),
        ("PB20250205004", "Global Shipping Ltd.", 4500.00, Currency::Usd, PayableStatus::Pending, day(2025, 2, 5), day(2025, 2, 20)),
        ("PB20250115005", "FedEx Logistics", 1200.00, Currency::Usd, PayableStatus::Paid, day(2025, 1, 15), day(2025, 1, 30)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (bill_no, supplier, amount, currency, status, created, due))| PayableBill {
            id: PayableBillId::new(Uuid::from_u128(0xA007_0000 + i as u128 + 1)),
            bill_no: bill_no.to_string(),
            supplier_name: supplier.to_string(),
            amount,
            currency,
            status,
            create_time: created,
            due_date: due,
        })
        .collect()
}
