use super::aggregate::{Supplier, SupplierId, SupplierType};
use crate::enums::RecordStatus;
use crate::shared::format::day;
use uuid::Uuid;

pub fn seed_suppliers() -> Vec<Supplier> {
    let rows = [
        ("FedEx Logistics", "John Doe", "+1 555-0101", SupplierType::Logistics, RecordStatus::Active, day(2024, 1, 15)),
        ("DHL Express", "Jane Smith", "+44 20 7946 0958", SupplierType::Logistics, RecordStatus::Active, day(2024, 2, 20)),
        ("Shenzhen Warehouse Co.", "Li Wei", "+86 138 0013 8000", SupplierType::Warehouse, RecordStatus::Inactive, day(2024, 3, 10)),
        ("Global Customs Broker", "Wang Fang", "+86 139 0000 1111", SupplierType::Customs, RecordStatus::Active, day(2024, 4, 5)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, contact, phone, supplier_type, status, created))| Supplier {
            id: SupplierId::new(Uuid::from_u128(0xA003_0000 + i as u128 + 1)),
            name: name.to_string(),
            contact_name: contact.to_string(),
            contact_phone: phone.to_string(),
            supplier_type,
            status,
            create_time: created,
        })
        .collect()
}
