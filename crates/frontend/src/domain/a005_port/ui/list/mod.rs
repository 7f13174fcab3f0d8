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
use contracts::domain::a005_port::aggregate::PortType;
use leptos::prelude::*;
use thaw::*;

fn type_icon(port_type: PortType) -> AnyView {
    match port_type {
        PortType::Air => icon("plane"),
        PortType::Sea => icon("anchor"),
        PortType::Land => icon("truck"),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PortList() -> impl IntoView {
    let state = create_state();
    let page = state.page;

    // фильтр применяется сразу при вводе
    Effect::new(move |_| {
        let filter = build_filter(&state.query.get(), &state.port_type.get(), &state.country.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| format!("共 {} 条, 已选 {} 条", p.visible().len(), p.selected_count()))
    });
    let countries = state.country_options();

    view! {
        <PageFrame page_id="a005_port--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"港口/口岸管理"</h1>
                    <span class="page__subtitle">"维护全球港口、机场及陆运口岸基础数据"</span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="搜索" width="240px">
                        <Input value=state.query placeholder="搜索代码/名称" />
                    </FilterField>
                    <FilterField label="类型">
                        <Select value=state.port_type>
                            <option value="">"全部类型"</option>
                            {PortType::all()
                                .into_iter()
                                .map(|t| view! {
                                    <option value=t.code()>{format!("{} ({})", t.display_name(), t.code())}</option>
                                })
                                .collect_view()}
                        </Select>
                    </FilterField>
                    <FilterField label="国家/地区">
                        <Select value=state.country>
                            <option value="">"全部"</option>
                            {countries
                                .into_iter()
                                .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a005-port-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=100.0>"代码"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"名称"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"国家/城市"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"类型"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"时区"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.query.get();
                                visible_rows(page)
                                    .into_iter()
                                    .map(|port| {
                                        let (checked, on_check) = row_selection(page, port.id);
                                        let code_hl = highlight_matches(&port.code, &query);
                                        let name_cn_hl = highlight_matches(&port.name_cn, &query);
                                        let name_en_hl = highlight_matches(&port.name_en, &query);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{code_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="cell--stacked">
                                                            <span>{name_cn_hl}</span>
                                                            <span class="cell--muted">{name_en_hl}</span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format!("{} / {}", port.country, port.city)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {type_icon(port.port_type)}
                                                        " "
                                                        {port.port_type.display_name()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{port.timezone.clone().unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {record_status_badge(port.status)}
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
