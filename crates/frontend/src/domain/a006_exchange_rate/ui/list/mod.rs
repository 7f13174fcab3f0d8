pub mod state;

use self::state::{build_filter, create_state};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::notice::{NoticeHost, NoticeState};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{header_selection, row_selection, status_badge, visible_rows};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_exchange_rate::aggregate::{RateSource, RateStatus};
use contracts::enums::Currency;
use contracts::shared::format::{format_date, format_number_with_decimals};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ExchangeRateList() -> impl IntoView {
    let state = create_state();
    let page = state.page;
    let notice = NoticeState::new();

    Effect::new(move |_| {
        let filter = build_filter(&state.source_currency.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let selected_count = Signal::derive(move || page.with(|p| p.selected_count()));
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| format!("共 {} 条, 已选 {} 条", p.visible().len(), p.selected_count()))
    });

    let delete_selected = Callback::new(move |_| {
        let mut removed = 0;
        page.update(|p| removed = p.remove_selected());
        log::info!("exchange rates deleted: {}", removed);
        notice.success("删除成功", format!("已删除 {} 条汇率记录", removed));
    });

    view! {
        <PageFrame page_id="a006_exchange_rate--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"币种汇率管理"</h1>
                    <span class="page__subtitle">"维护结算币种及汇率"</span>
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
                    <FilterField label="源币种">
                        <Select value=state.source_currency>
                            <option value="">"全部币种"</option>
                            {Currency::all()
                                .into_iter()
                                .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a006-rate-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=120.0>"币种对"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"源币种"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"目标币种"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"汇率"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"生效日期"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"来源"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                visible_rows(page)
                                    .into_iter()
                                    .map(|rate| {
                                        let (checked, on_check) = row_selection(page, rate.id);
                                        let source_color = match rate.source {
                                            RateSource::Manual => BadgeColor::Informative,
                                            RateSource::BankApi => BadgeColor::Brand,
                                        };
                                        let status_color = match rate.status {
                                            RateStatus::Active => BadgeColor::Success,
                                            RateStatus::Expired => BadgeColor::Subtle,
                                        };
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{rate.pair.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{rate.source_currency.code()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{rate.target_currency.code()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    {format_number_with_decimals(rate.rate, 4)}
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date(&rate.effective_date)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(rate.source.display_name(), source_color)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(rate.status.display_name(), status_color)}
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

            <ConfirmDialog
                open=state.confirm_delete_open
                title="删除汇率"
                message=Signal::derive(move || {
                    format!("确定删除选中的 {} 条汇率记录吗？", selected_count.get())
                })
                confirm_label="删除"
                on_confirm=delete_selected
            />
        </PageFrame>
    }
}
