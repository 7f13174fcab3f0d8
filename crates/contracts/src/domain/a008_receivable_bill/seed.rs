use super::aggregate::{ReceivableBill, ReceivableBillId, ReceivableStatus};
use crate::enums::Currency;
use crate::shared::format::day;
use uuid::Uuid;

pub fn seed_receivable_bills() -> Vec<ReceivableBill> {
    let rows = [
        ("RB20250201001", "Acme Corp", 500.00, ReceivableStatus::Unpaid, day(2025, 2, 1), day(2025, 2, 15)),
        ("RB20250120002", "Globex Inc", 1200.00, ReceivableStatus::Received, day(2025, 1, 20), day(2025, 2, 5)),
        ("RB20250110003", "Soylent Corp", 300.00, ReceivableStatus::Overdue, day(2025, 1, 10), day(2025, 1, 25)),
        ("RB20250205004", "Umbrella Corp", 2500.00, ReceivableStatus::Unpaid, day(2025, 2, 5), day(2025, 2, 20)),
        ("RB20250115005", "Acme Corp", 800.00, ReceivableStatus::Received, day(2025, 1, 15), day(2025, 1, 30)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (bill_no, customer, amount, status, created, due))| ReceivableBill {
            id: ReceivableBillId::new(Uuid::from_u128(0xA008_0000 + i as u128 + 1)),
            bill_no: bill_no.to_string(),
            customer_name: customer.to_string(),
            amount,
            currency: Currency::Usd,
            status,
            create_time: created,
            due_date: due,
        })
        .collect()
}
