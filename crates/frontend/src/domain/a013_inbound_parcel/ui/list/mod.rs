pub mod state;

use self::state::create_state;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::list_utils::{header_selection, row_selection, status_badge, visible_rows};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a013_inbound_parcel::aggregate::InboundStatus;
use contracts::enums::warehouse_kind::{destination_name, WAREHOUSE_DESTINATIONS};
use contracts::enums::WarehouseKind;
use contracts::shared::format::{format_datetime, format_number_with_decimals};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InboundParcelList() -> impl IntoView {
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
            let weight: f64 = visible.iter().map(|parcel| parcel.weight).sum();
            format!(
                "共 {} 件, 总重 {} kg, 已选 {} 件",
                visible.len(),
                format_number_with_decimals(weight, 2),
                p.selected_count()
            )
        })
    });

    view! {
        <PageFrame page_id="a013_inbound_parcel--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"入库管理"</h1>
                </div>
            </div>

            <div class="page__content">
                <TabList selected_value=state.kind>
                    {WarehouseKind::all()
                        .into_iter()
                        .map(|kind| view! {
                            <Tab value=kind.code()>{format!("{}入库", kind.display_name())}</Tab>
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
                    <FilterField label="快递单号">
                        <Input value=state.tracking_no placeholder="请输入快递单号" />
                    </FilterField>
                    <FilterField label="客户名称">
                        <Input value=state.customer placeholder="客户名称或编码" />
                    </FilterField>
                    <FilterField label="入库时间" width="160px">
                        <DateInput value=state.inbound_date />
                    </FilterField>
                    <FilterField label="状态" width="130px">
                        <Select value=state.status>
                            <option value="">"是否出库"</option>
                            {InboundStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="是否拆包" width="120px">
                        <Select value=state.unpacked>
                            <option value="">"全部"</option>
                            <option value="YES">"是"</option>
                            <option value="NO">"否"</option>
                        </Select>
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
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a013-inbound-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=170.0>"快递单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"客户"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=70.0>"来源"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"重量 (kg)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"目的地"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"仓库/线路"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"收件信息"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=70.0>"拆包"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"入库时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                visible_rows(page)
                                    .into_iter()
                                    .map(|parcel| {
                                        let (checked, on_check) = row_selection(page, parcel.id);
                                        let status_color = match parcel.status {
                                            InboundStatus::Inbound => BadgeColor::Brand,
                                            InboundStatus::Outbound => BadgeColor::Success,
                                        };
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{parcel.tracking_no.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{} ({})", parcel.customer_name, parcel.customer_code)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{parcel.source.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {format_number_with_decimals(parcel.weight, 2)}
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{destination_name(&parcel.destination).to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="cell--stacked">
                                                            <span>{parcel.warehouse_name.clone()}</span>
                                                            <span class="cell--muted">{parcel.route.clone()}</span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="cell--stacked">
                                                            <span>{format!("{} {}", parcel.contact, parcel.phone)}</span>
                                                            <span class="cell--muted" title=parcel.address.clone()>{parcel.address.clone()}</span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{if parcel.is_unpacked { "是" } else { "否" }}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(parcel.status.display_name(), status_color)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime(&parcel.inbound_time)}</TableCellLayout>
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
