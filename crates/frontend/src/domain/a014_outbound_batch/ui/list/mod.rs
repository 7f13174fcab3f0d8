pub mod state;

use self::state::create_state;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::table::{TableCellCheckbox, TableCellMoney, TableHeaderCheckbox};
use crate::shared::list_utils::{header_selection, row_selection, status_badge, visible_rows};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a014_outbound_batch::aggregate::OutboundStatus;
use contracts::enums::warehouse_kind::{destination_name, WAREHOUSE_DESTINATIONS};
use contracts::enums::WarehouseKind;
use contracts::shared::format::{format_datetime, format_number_with_decimals};
use leptos::prelude::*;
use thaw::*;

fn status_color(status: OutboundStatus) -> BadgeColor {
    match status {
        OutboundStatus::Outbound => BadgeColor::Informative,
        OutboundStatus::Transporting => BadgeColor::Brand,
        OutboundStatus::Arrived => BadgeColor::Success,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OutboundBatchList() -> impl IntoView {
    let state = create_state();
    let page = state.page;

    Effect::new(move |prev: Option<String>| {
        let kind = state.kind.get();
        if prev.is_some() {
            state.switch_kind();
        }
        kind
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| {
            let visible = p.visible();
            let packages: u32 = visible.iter().map(|b| b.package_count).sum();
            format!("共 {} 个批次, {} 件包裹", visible.len(), packages)
        })
    });

    view! {
        <PageFrame page_id="a014_outbound_batch--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"出库管理"</h1>
                </div>
            </div>

            <div class="page__content">
                <TabList selected_value=state.kind>
                    {WarehouseKind::all()
                        .into_iter()
                        .map(|kind| view! {
                            <Tab value=kind.code()>{format!("{}出库", kind.display_name())}</Tab>
                        })
                        .collect_view()}
                </TabList>

                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_search=Callback::new(move |_| state.search())
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="批次号">
                        <Input value=state.batch_no placeholder="请输入批次号" />
                    </FilterField>
                    <FilterField label="供应商单号">
                        <Input value=state.supplier_tracking_no placeholder="请输入供应商单号" />
                    </FilterField>
                    <FilterField label="目的地国家/地区">
                        <Select value=state.destination>
                            <option value="">"请选择目的地"</option>
                            {WAREHOUSE_DESTINATIONS
                                .iter()
                                .map(|(code, name)| view! {
                                    <option value=*code>{format!("{} {}", name, code)}</option>
                                })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="状态" width="150px">
                        <Select value=state.status>
                            <option value="">"全部状态"</option>
                            {OutboundStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="出库时间" width="320px">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <DateInput value=state.outbound_from />
                            <span>"至"</span>
                            <DateInput value=state.outbound_to />
                        </Flex>
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a014-outbound-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=170.0>"批次号/运单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"客户数"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"托数/箱数"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"出库重量/计费重量"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"体积 (m³)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"包裹数"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"货值"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"供应商单号/承运商"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"目的地"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"预报"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"实际出库时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                visible_rows(page)
                                    .into_iter()
                                    .map(|batch| {
                                        let (checked, on_check) = row_selection(page, batch.id);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="cell--stacked">
                                                            <span class="cell--mono">{batch.batch_no.clone()}</span>
                                                            <span class="cell--muted">{batch.tracking_no.clone()}</span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">{batch.customer_count}</TableCell>
                                                <TableCell class="text-right">
                                                    {format!("{} / {}", batch.pallet_count, batch.box_count)}
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {format!(
                                                        "{} / {} kg",
                                                        format_number_with_decimals(batch.outbound_weight, 2),
                                                        format_number_with_decimals(batch.inbound_weight, 2),
                                                    )}
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {format_number_with_decimals(batch.volume, 3)}
                                                </TableCell>
                                                <TableCell class="text-right">{batch.package_count}</TableCell>
                                                <TableCellMoney value=batch.total_value />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="cell--stacked">
                                                            <span class="cell--mono">{batch.supplier_tracking_no.clone()}</span>
                                                            <span class="cell--muted">{batch.carrier.clone()}</span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{destination_name(&batch.destination).to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {if batch.pre_report_success {
                                                            status_badge("成功", BadgeColor::Success)
                                                        } else {
                                                            status_badge("失败", BadgeColor::Danger)
                                                        }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(batch.status.display_name(), status_color(batch.status))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime(&batch.actual_outbound_time)}</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
