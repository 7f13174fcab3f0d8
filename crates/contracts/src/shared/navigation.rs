//! Навигация консоли: ключи страниц, таблица маршрутов и дерево меню.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Ключ страницы (совпадает с ключом вкладки во фронтенде)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKey {
    Dashboard,
    TaxAnalysis,
    Payable,
    Receivable,
    Products,
    Quotation,
    LogisticsOrders,
    CollectionOrders,
    BatchOverview,
    Inbound,
    Outbound,
    Suppliers,
    Lines,
    Ports,
    Currency,
}

impl PageKey {
    pub fn all() -> Vec<PageKey> {
        vec![
            PageKey::Dashboard,
            PageKey::TaxAnalysis,
            PageKey::Payable,
            PageKey::Receivable,
            PageKey::Products,
            PageKey::Quotation,
            PageKey::LogisticsOrders,
            PageKey::CollectionOrders,
            PageKey::BatchOverview,
            PageKey::Inbound,
            PageKey::Outbound,
            PageKey::Suppliers,
            PageKey::Lines,
            PageKey::Ports,
            PageKey::Currency,
        ]
    }

    /// Ключ вкладки
    pub fn key(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::LogisticsOrders => "a001_logistics_order",
            PageKey::TaxAnalysis => "a002_tax_analysis",
            PageKey::Suppliers => "a003_supplier",
            PageKey::Lines => "a004_international_line",
            PageKey::Ports => "a005_port",
            PageKey::Currency => "a006_exchange_rate",
            PageKey::Payable => "a007_payable_bill",
            PageKey::Receivable => "a008_receivable_bill",
            PageKey::CollectionOrders => "a009_collection_order",
            PageKey::BatchOverview => "a010_batch_overview",
            PageKey::Products => "a011_product",
            PageKey::Quotation => "a012_quotation",
            PageKey::Inbound => "a013_inbound_parcel",
            PageKey::Outbound => "a014_outbound_batch",
        }
    }

    /// Заголовок вкладки и пункта меню
    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "仪表盘",
            PageKey::TaxAnalysis => "数据分析",
            PageKey::Payable => "供应商应付",
            PageKey::Receivable => "客户应收",
            PageKey::Products => "产品管理",
            PageKey::Quotation => "报价管理",
            PageKey::LogisticsOrders => "国际物流订单",
            PageKey::CollectionOrders => "物流揽收单",
            PageKey::BatchOverview => "批次概览",
            PageKey::Inbound => "入库管理",
            PageKey::Outbound => "出库管理",
            PageKey::Suppliers => "供应商管理",
            PageKey::Lines => "国际线路",
            PageKey::Ports => "港口/口岸",
            PageKey::Currency => "汇率管理",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "/",
            PageKey::TaxAnalysis => "/operation/analysis",
            PageKey::Payable => "/finance/payable",
            PageKey::Receivable => "/finance/receivable",
            PageKey::Products => "/product/list",
            PageKey::Quotation => "/quotation",
            PageKey::LogisticsOrders => "/logistics/orders",
            PageKey::CollectionOrders => "/logistics/collection-orders",
            PageKey::BatchOverview => "/logistics/batch-overview",
            PageKey::Inbound => "/warehouse/inbound",
            PageKey::Outbound => "/warehouse/outbound",
            PageKey::Suppliers => "/base/suppliers",
            PageKey::Lines => "/base/lines",
            PageKey::Ports => "/base/ports",
            PageKey::Currency => "/base/currency",
        }
    }

    pub fn from_key(key: &str) -> Option<PageKey> {
        PageKey::all().into_iter().find(|page| page.key() == key)
    }
}

/// Разрешает путь URL в страницу; неизвестный путь ведёт на дашборд
pub fn route_for_path(path: &str) -> PageKey {
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    PageKey::all()
        .into_iter()
        .find(|page| page.path() == normalized)
        .unwrap_or(PageKey::Dashboard)
}

/// Пункт бокового меню
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    Leaf {
        key: &'static str,
        title: &'static str,
        icon: &'static str,
        path: &'static str,
        enabled: bool,
    },
    Group {
        key: &'static str,
        title: &'static str,
        icon: &'static str,
        enabled: bool,
        children: Vec<MenuItem>,
    },
}

impl MenuItem {
    fn page(page: PageKey, icon: &'static str) -> Self {
        MenuItem::Leaf {
            key: page.key(),
            title: page.title(),
            icon,
            path: page.path(),
            enabled: true,
        }
    }

    /// Пункт без реализованной страницы (отображается неактивным)
    fn placeholder(key: &'static str, title: &'static str, icon: &'static str, path: &'static str) -> Self {
        MenuItem::Leaf {
            key,
            title,
            icon,
            path,
            enabled: false,
        }
    }

    fn group(key: &'static str, title: &'static str, icon: &'static str, children: Vec<MenuItem>) -> Self {
        MenuItem::Group {
            key,
            title,
            icon,
            enabled: true,
            children,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MenuItem::Leaf { key, .. } | MenuItem::Group { key, .. } => key,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuItem::Leaf { title, .. } | MenuItem::Group { title, .. } => title,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            MenuItem::Leaf { enabled, .. } | MenuItem::Group { enabled, .. } => *enabled,
        }
    }

    /// Страница, которую открывает пункт (только для активных листьев)
    pub fn target(&self) -> Option<PageKey> {
        match self {
            MenuItem::Leaf {
                key, enabled: true, ..
            } => PageKey::from_key(key),
            _ => None,
        }
    }
}

/// Меню, собранное один раз для боковой панели
pub static MENU: Lazy<Vec<MenuItem>> = Lazy::new(menu);

/// Дерево бокового меню
pub fn menu() -> Vec<MenuItem> {
    vec![
        MenuItem::page(PageKey::Dashboard, "layout-dashboard"),
        MenuItem::page(PageKey::TaxAnalysis, "activity"),
        MenuItem::group(
            "finance",
            "财务管理",
            "wallet",
            vec![
                MenuItem::page(PageKey::Payable, "file-text"),
                MenuItem::page(PageKey::Receivable, "dollar-sign"),
            ],
        ),
        MenuItem::group(
            "ecommerce",
            "电商管理",
            "shopping-bag",
            vec![
                MenuItem::page(PageKey::Products, "shopping-cart"),
                MenuItem::placeholder("inventory", "库存管理", "package", "/inventory/list"),
            ],
        ),
        MenuItem::group(
            "logistics",
            "物流管理",
            "truck",
            vec![
                MenuItem::page(PageKey::Quotation, "file-text"),
                MenuItem::page(PageKey::LogisticsOrders, "plane"),
                MenuItem::page(PageKey::CollectionOrders, "file-text"),
                MenuItem::page(PageKey::BatchOverview, "package"),
            ],
        ),
        MenuItem::group(
            "warehouse",
            "仓储管理",
            "warehouse",
            vec![
                MenuItem::page(PageKey::Inbound, "log-in"),
                MenuItem::page(PageKey::Outbound, "log-out"),
            ],
        ),
        MenuItem::group(
            "base",
            "基础数据",
            "settings",
            vec![
                MenuItem::page(PageKey::Suppliers, "users"),
                MenuItem::page(PageKey::Lines, "map"),
                MenuItem::page(PageKey::Ports, "anchor"),
                MenuItem::page(PageKey::Currency, "arrow-right-left"),
            ],
        ),
        MenuItem::placeholder("tms", "运输管理", "map", "/tms"),
        MenuItem::placeholder("settings", "系统设置", "settings", "/settings"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(route_for_path("/operation/analysis"), PageKey::TaxAnalysis);
        assert_eq!(route_for_path("/logistics/orders/"), PageKey::LogisticsOrders);
        assert_eq!(route_for_path("/"), PageKey::Dashboard);
        assert_eq!(route_for_path(""), PageKey::Dashboard);
    }

    #[test]
    fn test_unknown_path_falls_back_to_dashboard() {
        assert_eq!(route_for_path("/no/such/page"), PageKey::Dashboard);
        assert_eq!(route_for_path("/inventory/list"), PageKey::Dashboard);
    }

    #[test]
    fn test_every_page_is_reachable_from_menu() {
        fn collect(items: &[MenuItem], out: &mut Vec<PageKey>) {
            for item in items {
                match item {
                    MenuItem::Group { children, .. } => collect(children, out),
                    leaf => out.extend(leaf.target()),
                }
            }
        }
        let mut reachable = Vec::new();
        collect(&menu(), &mut reachable);
        for page in PageKey::all() {
            assert!(reachable.contains(&page), "{:?} missing from menu", page);
        }
    }

    #[test]
    fn test_disabled_items_have_no_target() {
        let items = menu();
        let tms = items.iter().find(|i| i.key() == "tms").unwrap();
        assert!(!tms.is_enabled());
        assert_eq!(tms.target(), None);
    }

    #[test]
    fn test_page_keys_round_trip() {
        for page in PageKey::all() {
            assert_eq!(PageKey::from_key(page.key()), Some(page));
        }
    }
}
