use super::aggregate::{Port, PortId, PortType};
use crate::enums::RecordStatus;
use uuid::Uuid;

pub fn seed_ports() -> Vec<Port> {
    let rows = [
        ("PVG", "Shanghai Pudong Int. Airport", "上海浦东国际机场", "CN", "Shanghai", PortType::Air, "GMT+8"),
        ("LAX", "Los Angeles Int. Airport", "洛杉矶国际机场", "US", "Los Angeles", PortType::Air, "GMT-8"),
        ("SHA", "Shanghai Port", "上海港", "CN", "Shanghai", PortType::Sea, "GMT+8"),
        ("LGB", "Port of Long Beach", "长滩港", "US", "Long Beach", PortType::Sea, "GMT-8"),
        ("LHR", "London Heathrow Airport", "伦敦希思罗机场", "UK", "London", PortType::Air, "GMT+0"),
        ("HKG", "Hong Kong Int. Airport", "香港国际机场", "CN", "Hong Kong", PortType::Air, "GMT+8"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (code, name_en, name_cn, country, city, port_type, tz))| Port {
            id: PortId::new(Uuid::from_u128(0xA005_0000 + i as u128 + 1)),
            code: code.to_string(),
            name_en: name_en.to_string(),
            name_cn: name_cn.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            port_type,
            status: RecordStatus::Active,
            timezone: Some(tz.to_string()),
        })
        .collect()
}
