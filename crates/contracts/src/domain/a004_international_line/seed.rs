use super::aggregate::{InternationalLine, InternationalLineId};
use crate::enums::RecordStatus;
use crate::shared::format::day;
use uuid::Uuid;

pub fn seed_lines() -> Vec<InternationalLine> {
    let rows = [
        ("US Express Special", "US-EXP-001", "USA", "FedEx", RecordStatus::Active, day(2024, 1, 10)),
        ("EU Economy Line", "EU-ECO-002", "Germany", "DHL", RecordStatus::Active, day(2024, 2, 15)),
        ("Japan Direct", "JP-DIR-003", "Japan", "Sagawa", RecordStatus::Inactive, day(2024, 3, 20)),
        ("Mexico Standard", "MX-STD-004", "Mexico", "Estafeta", RecordStatus::Active, day(2024, 4, 12)),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, code, country, transporter, status, created))| InternationalLine {
            id: InternationalLineId::new(Uuid::from_u128(0xA004_0000 + i as u128 + 1)),
            name: name.to_string(),
            code: code.to_string(),
            destination_country: country.to_string(),
            transporter: transporter.to_string(),
            status,
            create_time: created,
        })
        .collect()
}
