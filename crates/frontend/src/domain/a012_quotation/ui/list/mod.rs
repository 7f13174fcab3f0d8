pub mod state;

use self::state::{build_filter, create_state, QuoteRef, QuotationListState, TAB_PURCHASE, TAB_SALES};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::notice::{NoticeHost, NoticeState};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, status_badge};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a012_quotation::aggregate::QuoteStatus;
use contracts::shared::format::{format_datetime, format_money};
use leptos::prelude::*;
use thaw::*;

fn quote_status_badge(status: QuoteStatus) -> AnyView {
    let color = match status {
        QuoteStatus::Draft => BadgeColor::Subtle,
        QuoteStatus::Confirmed => BadgeColor::Success,
    };
    status_badge(status.display_name(), color)
}

/// Кнопки строки: просмотр всегда, подтверждение только для черновика
fn row_actions(state: QuotationListState, target: QuoteRef, status: QuoteStatus) -> impl IntoView {
    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            size=ButtonSize::Small
            on_click=move |_| state.show_detail(target)
        >
            {icon("eye")}
        </Button>
        {(status == QuoteStatus::Draft).then(|| view! {
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| state.ask_confirm(target)
            >
                {icon("check-circle")}
                " 确认"
            </Button>
        })}
    }
}

/// Панель фильтров вкладки: поиск по номеру/товару и статус
fn quote_filter_panel(
    state: QuotationListState,
    query: RwSignal<String>,
    status: RwSignal<String>,
    active_filters: Signal<usize>,
    summary: Signal<String>,
) -> impl IntoView {
    view! {
        <FilterPanel
            is_expanded=state.is_filter_expanded
            active_filters_count=active_filters
            summary=summary
            on_reset=Callback::new(move |_| {
                query.set(String::new());
                status.set(String::new());
            })
        >
            <FilterField label="单号/品名" width="240px">
                <Input value=query placeholder="搜索单号或品名..." />
            </FilterField>
            <FilterField label="状态" width="130px">
                <Select value=status>
                    <option value="">"全部状态"</option>
                    {QuoteStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                        .collect_view()}
                </Select>
            </FilterField>
        </FilterPanel>
    }
}

#[component]
fn PurchaseTab(state: QuotationListState) -> impl IntoView {
    let board = state.board;
    Effect::new(move |_| {
        let filter = build_filter(&state.purchase_query.get(), &state.purchase_status.get());
        board.update(|b| b.purchase.set_filter(filter));
    });

    let active_filters = Signal::derive(move || board.with(|b| b.purchase.active_filters_count()));
    let summary = Signal::derive(move || board.with(|b| format!("共 {} 条", b.purchase.visible().len())));

    view! {
        {quote_filter_panel(state, state.purchase_query, state.purchase_status, active_filters, summary)}

        <div class="table-wrapper">
            <Table attr:id="a012-purchase-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=90.0>"单号"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"供应商"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"路线 (起/终)"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"品名/服务"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"运费/操作费"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=150.0>"创建时间"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let query = state.purchase_query.get();
                        board
                            .with(|b| b.purchase.visible().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|q| {
                                let target = QuoteRef::Purchase(q.id);
                                let quote_no_hl = highlight_matches(&q.quote_no, &query);
                                let product_name_hl = highlight_matches(&q.product_name, &query);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="cell--mono cell--strong">{quote_no_hl}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{q.supplier}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format!("{} → {}", q.origin, q.destination)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="cell-stack">
                                                    <span>{product_name_hl}</span>
                                                    <span class="cell-stack__secondary">{q.service_type}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="cell-stack">
                                                    <span>{format!("{} {}/kg", q.currency.code(), format_money(q.transport_fee))}</span>
                                                    <span class="cell-stack__secondary">{format!("Op: {}", format_money(q.operation_fee))}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{quote_status_badge(q.status)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_datetime(&q.created_time)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row_actions(state, target, q.status)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn SalesTab(state: QuotationListState) -> impl IntoView {
    let board = state.board;
    Effect::new(move |_| {
        let filter = build_filter(&state.sales_query.get(), &state.sales_status.get());
        board.update(|b| b.sales.set_filter(filter));
    });

    let active_filters = Signal::derive(move || board.with(|b| b.sales.active_filters_count()));
    let summary = Signal::derive(move || board.with(|b| format!("共 {} 条", b.sales.visible().len())));

    view! {
        {quote_filter_panel(state, state.sales_query, state.sales_status, active_filters, summary)}

        <div class="table-wrapper">
            <Table attr:id="a012-sales-table" attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=90.0>"单号"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"源采购单"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"路线"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"品名/服务"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"报价(预估)"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=90.0>"状态"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=150.0>"创建时间"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=140.0>"操作"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let query = state.sales_query.get();
                        board
                            .with(|b| b.sales.visible().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .map(|q| {
                                let target = QuoteRef::Sales(q.id);
                                let quote_no_hl = highlight_matches(&q.quote_no, &query);
                                let product_name_hl = highlight_matches(&q.product_name, &query);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="cell--mono cell--strong">{quote_no_hl}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout><span class="cell--mono">{q.source_quote_no}</span></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format!("{} → {}", q.origin, q.destination)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="cell-stack">
                                                    <span>{product_name_hl}</span>
                                                    <span class="cell-stack__secondary">{q.service_type}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div class="cell-stack">
                                                    <span>{format!("{}/kg", format_money(q.transport_fee))}</span>
                                                    <span class="cell-stack__secondary">
                                                        {format!("Op: {} · 税率 {}", format_money(q.operation_fee), q.composite_tax_rate)}
                                                    </span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{quote_status_badge(q.status)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_datetime(&q.created_time)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row_actions(state, target, q.status)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn QuotationList() -> impl IntoView {
    let state = create_state();
    let board = state.board;
    let notice = NoticeState::new();

    let confirm_message = Signal::derive(move || {
        state
            .confirm_target
            .get()
            .and_then(|target| board.with(|b| target.confirm_message(b)))
            .unwrap_or_default()
    });

    let on_confirm = Callback::new(move |_| {
        let Some(target) = state.confirm_target.get_untracked() else {
            return;
        };
        let now = chrono::Local::now().naive_local();
        match board.try_update(|b| target.confirm(b, now)) {
            Some(Ok((title, text))) => notice.success(title, text),
            Some(Err(e)) => notice.error("确认失败", e.to_string()),
            None => {}
        }
        state.confirm_target.set(None);
    });

    let detail_fields = move || {
        state
            .detail_target
            .get()
            .and_then(|target| board.with(|b| target.detail_fields(b)))
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="a012_quotation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"报价管理"</h1>
                    <span class="page__subtitle">"采购询价确认后自动生成销售报价草稿"</span>
                </div>
            </div>

            <div class="page__content">
                <NoticeHost state=notice />

                <TabList selected_value=state.tab>
                    <Tab value=TAB_PURCHASE>"采购报价 (Purchase)"</Tab>
                    <Tab value=TAB_SALES>"销售报价 (Sales)"</Tab>
                </TabList>

                {move || {
                    if state.tab.get() == TAB_SALES {
                        view! { <SalesTab state=state /> }.into_any()
                    } else {
                        view! { <PurchaseTab state=state /> }.into_any()
                    }
                }}
            </div>

            <ConfirmDialog
                open=state.confirm_open
                title="确认报价"
                message=confirm_message
                on_confirm=on_confirm
            />

            <Dialog open=state.detail_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"报价详情"</DialogTitle>
                        <DialogContent>
                            <dl class="detail-list">
                                {move || {
                                    detail_fields()
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <div class="detail-list__row">
                                                <dt class="detail-list__label">{label}</dt>
                                                <dd class="detail-list__value">{value}</dd>
                                            </div>
                                        })
                                        .collect_view()
                                }}
                            </dl>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.detail_open.set(false)
                            >
                                "关闭"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
