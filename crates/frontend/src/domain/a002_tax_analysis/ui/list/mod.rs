pub mod state;

use self::state::{create_state, destinations_label, now, TaxAnalysisListState};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterField, FilterPanel, FilterTag};
use crate::shared::components::notice::{NoticeHost, NoticeState};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{TableCellCheckbox, TableCellMoney, TableHeaderCheckbox};
use crate::shared::export::download_sheet;
use crate::shared::icons::icon;
use crate::shared::list_utils::pick_by_code;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_tax_analysis::currency::TaxCurrency;
use contracts::domain::a002_tax_analysis::export::ExportScope;
use contracts::domain::a002_tax_analysis::stats::StatsSummary;
use contracts::enums::Country;
use contracts::shared::config::ConsoleConfig;
use contracts::shared::format::{format_datetime, format_money, format_number_int, format_percent};
use leptos::prelude::*;
use thaw::*;

/// Переключатели стран для фильтра "起运国"/"目的国"
#[component]
fn CountryChips(
    state: TaxAnalysisListState,
    /// true: 目的国, false: 起运国
    destination: bool,
) -> impl IntoView {
    let board = state.board;
    Country::filter_options()
        .into_iter()
        .map(|country| {
            let active = move || {
                board.with(|b| {
                    let list = if destination { &b.draft.dest_countries } else { &b.draft.origin_countries };
                    list.contains(&country)
                })
            };
            view! {
                <span
                    class="filter-chip"
                    class:filter-chip--active=active
                    on:click=move |_| {
                        board.update(|b| {
                            if destination {
                                b.draft.toggle_dest(country);
                            } else {
                                b.draft.toggle_origin(country);
                            }
                        })
                    }
                >
                    {country.option_label()}
                </span>
            }
        })
        .collect_view()
}

#[component]
#[allow(non_snake_case)]
pub fn TaxAnalysisList() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let state = create_state(&config.tax_analysis);
    let board = state.board;
    let notice = NoticeState::new();

    Effect::new(move |_| {
        let code = state.currency.get();
        if let Some(currency) = pick_by_code(TaxCurrency::all(), &code, |c| c.code()) {
            if board.with_untracked(|b| b.currency()) != currency {
                board.update(|b| b.set_currency(currency));
            }
        }
    });

    let currency_code = Signal::derive(move || board.with(|b| b.currency().code()));
    let stats = Signal::derive(move || board.with(|b| b.stats()));
    let stat_subtitle = Signal::derive(move || {
        Some(board.with(|b| destinations_label(b.applied_destinations())))
    });
    let money_stat = move |pick: fn(&StatsSummary) -> f64, source: TaxCurrency| {
        Signal::derive(move || {
            board.with(|b| {
                let value = b.to_display(pick(&b.stats()), source);
                format!("{} {}", format_money(value), b.currency().code())
            })
        })
    };

    let selected_count = Signal::derive(move || board.with(|b| b.page.selected_count()));
    let all_checked = Signal::derive(move || board.with(|b| b.page.all_visible_selected()));
    let some_checked = Signal::derive(move || selected_count.get() > 0);
    let on_toggle_all = Callback::new(move |value: bool| {
        board.update(|b| b.page.set_all_visible(value));
    });
    let active_filters = Signal::derive(move || board.with(|b| b.page.active_filters_count()));
    let summary = Signal::derive(move || {
        board.with(|b| format!("共 {} 条, 已选 {} 条", b.page.visible().len(), b.page.selected_count()))
    });

    let draft_tags = move || {
        let (origins, dests) =
            board.with(|b| (b.draft.origin_countries.clone(), b.draft.dest_countries.clone()));
        let origin_tags = origins.into_iter().map(move |country| {
            view! {
                <FilterTag
                    label=format!("起运国: {}", country.display_name())
                    on_remove=Callback::new(move |_| board.update(|b| b.draft.toggle_origin(country)))
                />
            }
        });
        let dest_tags = dests.into_iter().map(move |country| {
            view! {
                <FilterTag
                    label=format!("目的国: {}", country.display_name())
                    on_remove=Callback::new(move |_| board.update(|b| b.draft.toggle_dest(country)))
                />
            }
        });
        origin_tags.chain(dest_tags).collect_view()
    };

    let save_remark = move |_| {
        let Some(id) = state.remark_target.get_untracked() else {
            return;
        };
        let text = state.remark_text.get_untracked();
        let mut result = Ok(());
        board.update(|b| result = b.update_remark(id, &text));
        match result {
            Ok(()) => {
                state.remark_open.set(false);
                notice.success("保存成功", "备注已更新");
            }
            Err(e) => notice.error("保存失败", e.to_string()),
        }
    };

    let run_export = move |scope: ExportScope| {
        let sheet = board.with_untracked(|b| b.export(scope, &now()));
        state.export_open.set(false);
        match sheet {
            Ok(sheet) => match download_sheet(&sheet) {
                Ok(()) => {
                    log::info!("tax analysis exported: {} rows, {:?}", sheet.rows.len(), scope);
                    notice.success("导出成功", format!("已导出 {} 条数据", sheet.rows.len()));
                }
                Err(e) => notice.error("导出失败", e),
            },
            Err(e) => notice.warning("导出失败", e.to_string()),
        }
    };

    view! {
        <PageFrame page_id="a002_tax_analysis--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"货值-税费分析"</h1>
                    <span class="page__subtitle">"申报货值与预估/实际税费对比"</span>
                </div>
                <div class="page__header-right">
                    <Flex align=FlexAlign::Center>
                        <span class="page__label">"显示币种"</span>
                        <Select value=state.currency>
                            {TaxCurrency::all()
                                .into_iter()
                                .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                                .collect_view()}
                        </Select>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| state.export_open.set(true)
                        >
                            {icon("download")}
                            " 导出"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <NoticeHost state=notice />

                <div class="stat-grid">
                    <StatCard
                        label="订单总数"
                        icon_name="package"
                        value=Signal::derive(move || format_number_int(stats.get().total_orders as f64))
                        subtitle=stat_subtitle
                    />
                    <StatCard
                        label="货值总额"
                        icon_name="dollar-sign"
                        value=money_stat(|s| s.goods_value, TaxCurrency::Usd)
                    />
                    <StatCard
                        label="申报总额"
                        icon_name="file-text"
                        value=money_stat(|s| s.declared_value, TaxCurrency::Usd)
                    />
                    <StatCard
                        label="实际税费"
                        icon_name="receipt"
                        value=money_stat(|s| s.actual_tax, TaxCurrency::Hkd)
                    />
                    <StatCard
                        label="综合税率"
                        icon_name="percent"
                        value=Signal::derive(move || format_percent(stats.get().tax_ratio))
                    />
                </div>

                <FilterPanel
                    is_expanded=state.is_filter_expanded
                    active_filters_count=active_filters
                    summary=summary
                    tags=draft_tags.into_any()
                    on_search=Callback::new(move |_| state.search())
                    on_reset=Callback::new(move |_| state.reset())
                >
                    <FilterField label="起运国">
                        <div class="filter-chips">
                            <CountryChips state=state destination=false />
                        </div>
                    </FilterField>
                    <FilterField label="目的国">
                        <div class="filter-chips">
                            <CountryChips state=state destination=true />
                        </div>
                    </FilterField>
                    <FilterField label="供应商运单号" width="200px">
                        <Input value=state.supplier_waybill_no placeholder="输入运单号..." />
                    </FilterField>
                    <FilterField label="跟踪号" width="200px">
                        <Input value=state.tracking_no placeholder="输入跟踪号..." />
                    </FilterField>
                    <FilterField label="创建日期从" width="160px">
                        <DateInput value=state.date_from />
                    </FilterField>
                    <FilterField label="至" width="160px">
                        <DateInput value=state.date_to />
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a002-tax-analysis-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=150.0>"创建时间"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"起运国"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"目的国"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"供应商运单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"商户订单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"跟踪号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    {move || format!("货值 ({})", currency_code.get())}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    {move || format!("申报价值 ({})", currency_code.get())}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"申报比例"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    {move || format!("预估税费 ({})", currency_code.get())}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"预估税率"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    {move || format!("实际税费 ({})", currency_code.get())}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"实际税率"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    {move || format!("实际货值预估税费 ({})", currency_code.get())}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    {move || format!("对比差异 ({})", currency_code.get())}
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"备注"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let code = currency_code.get();
                                board
                                    .with(|b| b.rows())
                                    .into_iter()
                                    .map(|row| {
                                        let record = row.record;
                                        let id = record.id;
                                        let checked = Signal::derive(move || board.with(|b| b.page.is_selected(id)));
                                        let on_check = Callback::new(move |value: bool| {
                                            board.update(|b| b.page.set_selected(id, value));
                                        });
                                        let current_remark = record.remark.clone();
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime(&record.create_time)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{record.origin_country.display_name()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{record.dest_country.display_name()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{record.supplier_waybill_no}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{record.merchant_order_no}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{record.tracking_no}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=row.display.goods_value currency=code />
                                                <TableCellMoney value=row.display.declared_value currency=code />
                                                <TableCell>
                                                    <TableCellLayout>{format_percent(row.derived.declared_ratio)}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=row.display.estimated_tax currency=code />
                                                <TableCell>
                                                    <TableCellLayout>{format_percent(row.derived.estimated_tax_rate)}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=row.display.actual_tax currency=code />
                                                <TableCell>
                                                    <TableCellLayout>{format_percent(row.derived.actual_tax_rate)}</TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=row.display.estimated_tax_on_actual_value currency=code />
                                                <TableCellMoney value=row.display.diff currency=code color_by_sign=true bold=true />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--remark">{record.remark}</span>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click=move |_| state.open_remark(id, current_remark.clone())
                                                        >
                                                            {icon("edit")}
                                                        </Button>
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

            <Dialog open=state.remark_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"编辑备注"</DialogTitle>
                        <DialogContent>
                            <Textarea value=state.remark_text placeholder="输入备注..." />
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.remark_open.set(false)
                            >
                                "取消"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=save_remark>
                                "保存"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <Dialog open=state.export_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"导出数据"</DialogTitle>
                        <DialogContent>
                            {move || format!(
                                "当前查询 {} 条, 已选 {} 条。金额按 {} 导出。",
                                board.with(|b| b.page.visible().len()),
                                selected_count.get(),
                                currency_code.get(),
                            )}
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| run_export(ExportScope::Selection)
                            >
                                {ExportScope::Selection.display_name()}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| run_export(ExportScope::Query)
                            >
                                {ExportScope::Query.display_name()}
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
