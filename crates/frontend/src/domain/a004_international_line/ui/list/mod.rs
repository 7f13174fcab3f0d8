pub mod state;

use self::state::{build_filter, create_state};
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    header_selection, highlight_matches, record_status_badge, row_selection, visible_rows,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::enums::RecordStatus;
use contracts::shared::format::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn InternationalLineList() -> impl IntoView {
    let state = create_state();
    let page = state.page;

    Effect::new(move |_| {
        let filter = build_filter(&state.query.get(), &state.country.get(), &state.status.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| format!("共 {} 条, 已选 {} 条", p.visible().len(), p.selected_count()))
    });
    let countries = state.country_options();

    view! {
        <PageFrame page_id="a004_international_line--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"国际线路管理"</h1>
                    <span class="page__subtitle">"维护国际干线运输线路及承运商"</span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="线路" width="240px">
                        <Input value=state.query placeholder="搜索线路名称或代码..." />
                    </FilterField>
                    <FilterField label="目的地国家">
                        <Select value=state.country>
                            <option value="">"全部国家"</option>
                            {countries
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="状态" width="140px">
                        <Select value=state.status>
                            <option value="">"全部状态"</option>
                            {RecordStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a004-line-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=220.0>"线路名称"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"线路代码"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"目的地国家"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"承运商"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"创建时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.query.get();
                                visible_rows(page)
                                    .into_iter()
                                    .map(|line| {
                                        let (checked, on_check) = row_selection(page, line.id);
                                        let name_hl = highlight_matches(&line.name, &query);
                                        let code_hl = highlight_matches(&line.code, &query);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>{name_hl}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{code_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {icon("globe")}
                                                        " "
                                                        {line.destination_country.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{line.transporter.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{record_status_badge(line.status)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date(&line.create_time)}</TableCellLayout>
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
