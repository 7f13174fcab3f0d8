pub mod state;

use self::state::{build_filter, create_state};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::notice::{NoticeHost, NoticeState};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    header_selection, highlight_matches, row_selection, status_badge, visible_rows,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a009_collection_order::aggregate::CollectionStatus;
use contracts::shared::format::format_datetime_short;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: CollectionStatus) -> BadgeColor {
    match status {
        CollectionStatus::Pending => BadgeColor::Warning,
        CollectionStatus::Collected => BadgeColor::Success,
        CollectionStatus::Cancelled => BadgeColor::Subtle,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CollectionOrderList() -> impl IntoView {
    let state = create_state();
    let page = state.page;
    let notice = NoticeState::new();

    Effect::new(move |_| {
        let filter = build_filter(&state.query.get(), &state.status.get(), &state.final_country.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let selected_count = Signal::derive(move || page.with(|p| p.selected_count()));
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| format!("共 {} 条, 已选 {} 条", p.visible().len(), p.selected_count()))
    });
    let countries = state.country_options();

    let delete_selected = Callback::new(move |_| {
        let mut removed = 0;
        page.update(|p| removed = p.remove_selected());
        log::info!("collection orders deleted: {}", removed);
        notice.success("删除成功", format!("已删除 {} 条揽收单", removed));
    });

    view! {
        <PageFrame page_id="a009_collection_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"揽收单管理"</h1>
                    <span class="page__subtitle">"国内段揽收及快递单号跟踪"</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || selected_count.get() == 0)
                        on_click=move |_| state.confirm_delete_open.set(true)
                    >
                        {icon("delete")}
                        {move || format!(" 删除 ({})", selected_count.get())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <NoticeHost state=notice />

                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="快递单号/物流单号" width="240px">
                        <Input value=state.query placeholder="搜索快递单号或物流单号..." />
                    </FilterField>
                    <FilterField label="揽收状态" width="140px">
                        <Select value=state.status>
                            <option value="">"全部状态"</option>
                            {CollectionStatus::all()
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
                    <Table attr:id="a009-collection-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=150.0>"物流单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"发货人"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"供应商"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"快递单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"目的国"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"创建时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.query.get();
                                visible_rows(page)
                                    .into_iter()
                                    .map(|order| {
                                        let (checked, on_check) = row_selection(page, order.id);
                                        let logistics_order_no_hl = highlight_matches(&order.logistics_order_no, &query);
                                        let express_no_hl = highlight_matches(&order.express_no, &query);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{logistics_order_no_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{order.consignor_id.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{order.supplier_id.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{express_no_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{order.final_country.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(order.status.display_name(), status_color(order.status))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime_short(&order.create_time)}</TableCellLayout>
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

            <ConfirmDialog
                open=state.confirm_delete_open
                title="删除揽收单"
                message=Signal::derive(move || {
                    format!("确定删除选中的 {} 条揽收单吗？", selected_count.get())
                })
                confirm_label="删除"
                on_confirm=delete_selected
            />
        </PageFrame>
    }
}
