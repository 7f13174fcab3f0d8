pub mod state;

use self::state::{build_filter, create_state};
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::list_utils::{
    header_selection, highlight_matches, record_status_badge, row_selection, status_badge,
    visible_rows,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_supplier::aggregate::SupplierType;
use contracts::enums::RecordStatus;
use contracts::shared::format::format_date;
use leptos::prelude::*;
use thaw::*;

fn type_color(supplier_type: SupplierType) -> BadgeColor {
    match supplier_type {
        SupplierType::Logistics => BadgeColor::Brand,
        SupplierType::Warehouse => BadgeColor::Important,
        SupplierType::Customs => BadgeColor::Informative,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let state = create_state();
    let page = state.page;

    Effect::new(move |_| {
        let filter = build_filter(&state.name.get(), &state.supplier_type.get(), &state.status.get());
        page.update(|p| p.set_filter(filter));
    });

    let (all_checked, some_checked, on_toggle_all) = header_selection(page);
    let active_filters = Signal::derive(move || page.with(|p| p.active_filters_count()));
    let summary = Signal::derive(move || {
        page.with(|p| format!("共 {} 条, 已选 {} 条", p.visible().len(), p.selected_count()))
    });

    view! {
        <PageFrame page_id="a003_supplier--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"供应商管理"</h1>
                    <span class="page__subtitle">"管理物流商、仓储服务商及报关行"</span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="供应商名称" width="240px">
                        <Input value=state.name placeholder="搜索供应商名称..." />
                    </FilterField>
                    <FilterField label="供应商类型">
                        <Select value=state.supplier_type>
                            <option value="">"全部类型"</option>
                            {SupplierType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
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
                    <Table attr:id="a003-supplier-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=220.0>"供应商名称"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"类型"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"联系人"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"联系电话"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"创建时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.name.get();
                                visible_rows(page)
                                    .into_iter()
                                    .map(|supplier| {
                                        let (checked, on_check) = row_selection(page, supplier.id);
                                        let name_hl = highlight_matches(&supplier.name, &query);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>{name_hl}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(
                                                            supplier.supplier_type.display_name(),
                                                            type_color(supplier.supplier_type),
                                                        )}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{supplier.contact_name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{supplier.contact_phone.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{record_status_badge(supplier.status)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_date(&supplier.create_time)}</TableCellLayout>
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
