pub mod state;

use self::state::{build_filter, create_state};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::table::{TableCellCheckbox, TableCellMoney, TableHeaderCheckbox};
use crate::shared::list_utils::{
    header_selection, highlight_matches, row_selection, status_badge, visible_rows,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a008_receivable_bill::aggregate::ReceivableStatus;
use contracts::shared::format::format_date;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: ReceivableStatus) -> BadgeColor {
    match status {
        ReceivableStatus::Unpaid => BadgeColor::Warning,
        ReceivableStatus::Received => BadgeColor::Success,
        ReceivableStatus::Overdue => BadgeColor::Danger,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ReceivableBillList() -> impl IntoView {
    let state = create_state();
    let page = state.page;

    Effect::new(move |_| {
        let filter = build_filter(&state.query.get(), &state.status.get(), &state.bill_date.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| format!("共 {} 条, 已选 {} 条", p.visible().len(), p.selected_count()))
    });

    view! {
        <PageFrame page_id="a008_receivable_bill--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"应收账单"</h1>
                    <span class="page__subtitle">"客户应收款项及回款状态"</span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="账单号/客户" width="240px">
                        <Input value=state.query placeholder="搜索账单号或客户..." />
                    </FilterField>
                    <FilterField label="收款状态" width="140px">
                        <Select value=state.status>
                            <option value="">"全部状态"</option>
                            {ReceivableStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="账单日期" width="160px">
                        <DateInput value=state.bill_date />
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a008-receivable-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=150.0>"账单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"客户"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"金额"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"账单日期"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"到期日"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.query.get();
                                visible_rows(page)
                                    .into_iter()
                                    .map(|bill| {
                                        let (checked, on_check) = row_selection(page, bill.id);
                                        let bill_no_hl = highlight_matches(&bill.bill_no, &query);
                                        let customer_name_hl = highlight_matches(&bill.customer_name, &query);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{bill_no_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{customer_name_hl}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=bill.amount currency=bill.currency.code() bold=true />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(bill.status.display_name(), status_color(bill.status))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date(&bill.create_time)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class:cell--danger={bill.status == ReceivableStatus::Overdue}>
                                                            {format_date(&bill.due_date)}
                                                        </span>
                                                    </TableCellLayout>
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
