pub mod state;

use self::state::{build_filter, create_state};
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::list_utils::{
    header_selection, highlight_matches, row_selection, status_badge, visible_rows,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a010_batch_overview::aggregate::BatchStatus;
use contracts::shared::format::{format_datetime_short, format_number_with_decimals};
use leptos::prelude::*;
use thaw::*;

fn status_color(status: BatchStatus) -> BadgeColor {
    match status {
        BatchStatus::Planning => BadgeColor::Informative,
        BatchStatus::Transit => BadgeColor::Brand,
        BatchStatus::Arrived => BadgeColor::Important,
        BatchStatus::Cleared => BadgeColor::Warning,
        BatchStatus::Completed => BadgeColor::Success,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BatchOverviewList() -> impl IntoView {
    let state = create_state();
    let page = state.page;

    Effect::new(move |_| {
        let filter = build_filter(&state.batch_no.get(), &state.status.get(), &state.final_country.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| {
            let visible = p.visible();
            let orders: u32 = visible.iter().map(|b| b.order_count).sum();
            format!("共 {} 个批次, {} 单", visible.len(), orders)
        })
    });
    let countries = state.country_options();

    view! {
        <PageFrame page_id="a010_batch_overview--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"批次总览"</h1>
                    <span class="page__subtitle">"干线批次的预报重量与运输状态"</span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="批次号" width="220px">
                        <Input value=state.batch_no placeholder="搜索批次号..." />
                    </FilterField>
                    <FilterField label="批次状态" width="140px">
                        <Select value=state.status>
                            <option value="">"全部状态"</option>
                            {BatchStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="目的国" width="140px">
                        <Select value=state.final_country>
                            <option value="">"全部"</option>
                            {countries
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a010-batch-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=150.0>"批次号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"目的国"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"订单数"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"预报重量 (kg)"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"供应商"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"出库仓"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"创建时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.batch_no.get();
                                visible_rows(page)
                                    .into_iter()
                                    .map(|batch| {
                                        let (checked, on_check) = row_selection(page, batch.id);
                                        let batch_no_hl = highlight_matches(&batch.batch_no, &query);
                                        let forecast_weight_kg = batch.forecast_weight_kg();
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{batch_no_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{batch.final_country.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">{batch.order_count}</TableCell>
                                                <TableCell class="text-right">
                                                    {format_number_with_decimals(forecast_weight_kg, 2)}
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{batch.supplier_short_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{batch.warehouse_out_code.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(batch.status.display_name(), status_color(batch.status))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime_short(&batch.create_time)}</TableCellLayout>
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
