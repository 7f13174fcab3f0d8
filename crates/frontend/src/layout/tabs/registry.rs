//! Реестр содержимого вкладок: ключ вкладки → страница.

use crate::dashboards::d400_console_overview::ConsoleOverview;
use crate::domain::a001_logistics_order::ui::list::LogisticsOrderList;
use crate::domain::a002_tax_analysis::ui::list::TaxAnalysisList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_international_line::ui::list::InternationalLineList;
use crate::domain::a005_port::ui::list::PortList;
use crate::domain::a006_exchange_rate::ui::list::ExchangeRateList;
use crate::domain::a007_payable_bill::ui::list::PayableBillList;
use crate::domain::a008_receivable_bill::ui::list::ReceivableBillList;
use crate::domain::a009_collection_order::ui::list::CollectionOrderList;
use crate::domain::a010_batch_overview::ui::list::BatchOverviewList;
use crate::domain::a011_product::ui::list::ProductList;
use crate::domain::a012_quotation::ui::list::QuotationList;
use crate::domain::a013_inbound_parcel::ui::list::InboundParcelList;
use crate::domain::a014_outbound_batch::ui::list::OutboundBatchList;
use contracts::shared::navigation::PageKey;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент вкладки по её ключу; неизвестный ключ даёт заглушку
pub fn render_tab_content(key: &str) -> AnyView {
    let Some(page) = PageKey::from_key(key) else {
        log!("unknown tab key: {}", key);
        return view! { <div class="placeholder">"页面不存在"</div> }.into_any();
    };

    match page {
        PageKey::Dashboard => view! { <ConsoleOverview /> }.into_any(),
        PageKey::LogisticsOrders => view! { <LogisticsOrderList /> }.into_any(),
        PageKey::TaxAnalysis => view! { <TaxAnalysisList /> }.into_any(),
        PageKey::Suppliers => view! { <SupplierList /> }.into_any(),
        PageKey::Lines => view! { <InternationalLineList /> }.into_any(),
        PageKey::Ports => view! { <PortList /> }.into_any(),
        PageKey::Currency => view! { <ExchangeRateList /> }.into_any(),
        PageKey::Payable => view! { <PayableBillList /> }.into_any(),
        PageKey::Receivable => view! { <ReceivableBillList /> }.into_any(),
        PageKey::CollectionOrders => view! { <CollectionOrderList /> }.into_any(),
        PageKey::BatchOverview => view! { <BatchOverviewList /> }.into_any(),
        PageKey::Products => view! { <ProductList /> }.into_any(),
        PageKey::Quotation => view! { <QuotationList /> }.into_any(),
        PageKey::Inbound => view! { <InboundParcelList /> }.into_any(),
        PageKey::Outbound => view! { <OutboundBatchList /> }.into_any(),
    }
}
