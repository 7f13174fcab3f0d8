use super::aggregate::{
    BoxSpec, PairingStatus, Product, ProductId, ProductPairing, ProductPairingId,
};
use crate::shared::format::at;
use uuid::Uuid;

const IMAGE_URL: &str = "https://image.distributetop.com/erp-vue/90187652075560960/20260130/6440532e2b334e8eaecb4de82bab47cd.png";

fn spec(box_sku_id: &str, pcs_per_box: u32, dims: (f64, f64, f64), weight: f64) -> BoxSpec {
    BoxSpec {
        box_sku_id: box_sku_id.to_string(),
        pcs_per_box,
        length: dims.0,
        width: dims.1,
        height: dims.2,
        weight,
    }
}

pub fn seed_products() -> Vec<Product> {
    let rows = [
        (
            "YS", "1120450256", "8809747960903", "SKIN1004",
            "Madagascar Centella Poremizing Fresh Ampoule Mini", "马达加斯加积雪草毛孔新鲜安瓶",
            (1.0, 2.0, 3.0), 0.1, "测试", "Pae", at(2025, 10, 12, 10, 0, 0),
            vec![
                spec("1129048957", 50, (2.0, 3.0, 4.0), 0.1),
                spec("1120454106", 200, (3.0, 4.0, 5.0), 0.1),
            ],
        ),
        (
            "KJ", "SKU-002", "UPC987654321", "Logitech",
            "Wireless Mouse", "无线鼠标",
            (12.0, 7.0, 4.0), 120.0, "", "Admin", at(2025, 1, 21, 14, 30, 0),
            vec![spec("BSKU-002-A", 50, (40.0, 30.0, 20.0), 6.5)],
        ),
        (
            "YS", "1120450257", "8809747960904", "SKIN1004",
            "Madagascar Centella Toning Toner", "马达加斯加积雪草爽肤水",
            (5.0, 5.0, 15.0), 0.25, "热销品", "Pae", at(2025, 10, 12, 10, 5, 0),
            vec![spec("1129048958", 40, (30.0, 30.0, 20.0), 10.5)],
        ),
        (
            "YS", "1120450258", "8809747960905", "SKIN1004",
            "Madagascar Centella Ampoule Foam", "马达加斯加积雪草泡沫洁面",
            (6.0, 4.0, 16.0), 0.15, "", "Pae", at(2025, 10, 12, 10, 10, 0),
            vec![spec("1129048959", 60, (40.0, 40.0, 25.0), 9.5)],
        ),
        (
            "DX", "SKU-005", "UPC888888888", "Anua",
            "Heartleaf 77% Soothing Toner", "鱼腥草77%舒缓爽肤水",
            (5.0, 5.0, 18.0), 0.3, "新品上市", "Admin", at(2025, 10, 13, 9, 0, 0),
            vec![],
        ),
        (
            "KJ", "SKU-006", "UPC777777777", "Torriden",
            "Dive-In Low Molecule Hyaluronic Acid Serum", "低分子透明质酸精华",
            (4.0, 4.0, 10.0), 0.08, "", "Admin", at(2025, 10, 13, 9, 30, 0),
            vec![spec("BSKU-006-A", 100, (25.0, 25.0, 15.0), 8.5)],
        ),
        (
            "YS", "1120450261", "8809747960908", "SKIN1004",
            "Madagascar Centella Light Cleansing Oil", "马达加斯加积雪草轻盈卸妆油",
            (6.0, 6.0, 18.0), 0.22, "促销中", "Pae", at(2025, 10, 13, 10, 0, 0),
            vec![],
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (supplier, sku, upc, brand, name_en, name_cn, dims, weight, remark, operator, created, box_specs))| {
                Product {
                    id: ProductId::new(Uuid::from_u128(0xA011_0000 + i as u128 + 1)),
                    supplier_id: supplier.to_string(),
                    sku_id: sku.to_string(),
                    upc: upc.to_string(),
                    brand: brand.to_string(),
                    name_en: name_en.to_string(),
                    name_cn: name_cn.to_string(),
                    image_url: IMAGE_URL.to_string(),
                    length: dims.0,
                    width: dims.1,
                    height: dims.2,
                    weight,
                    remark: remark.to_string(),
                    operator: operator.to_string(),
                    create_time: created,
                    update_time: created,
                    box_specs,
                }
            },
        )
        .collect()
}

pub fn seed_pairings() -> Vec<ProductPairing> {
    let rows = [
        ("887886076015", "goodal/果达儿济州青橘VC精华面膜套装28G*5片", PairingStatus::OnSale),
        ("893202946965", "Anua鱼腥草深层清洁毛孔洗面奶150ml", PairingStatus::OffSale),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (shop_sku, name, status))| ProductPairing {
            id: ProductPairingId::new(Uuid::from_u128(0xA011_1000 + i as u128 + 1)),
            supplier_id: "YS".to_string(),
            upc: "8809747960903".to_string(),
            shop_sku: shop_sku.to_string(),
            product_name: name.to_string(),
            platform: "TikTok".to_string(),
            shop_name: "QUEMIMULOPS".to_string(),
            status,
            operator: "Pae".to_string(),
            create_time: at(2025, 10, 12, 17, 2, 39),
            update_time: at(2025, 10, 12, 17, 2, 39),
        })
        .collect()
}
