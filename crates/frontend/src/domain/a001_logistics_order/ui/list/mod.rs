pub mod state;

use self::state::{build_filter, create_state, BatchFeedback, LogisticsOrderListState};
use crate::shared::components::alert_dialog::AlertDialog;
use crate::shared::components::filter_panel::{FilterField, FilterPanel};
use crate::shared::components::notice::{NoticeHost, NoticeState};
use crate::shared::components::table::{TableCellCheckbox, TableCellMoney, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, status_badge};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_logistics_order::aggregate::{
    Channel, LogisticsOrder, OrderStatus, WmsSyncStatus,
};
use contracts::domain::a001_logistics_order::batch::BatchAction;
use contracts::domain::a001_logistics_order::board::BatchOutcome;
use contracts::shared::config::ConsoleConfig;
use contracts::shared::error::BatchError;
use contracts::shared::format::format_datetime;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: OrderStatus) -> BadgeColor {
    match status {
        OrderStatus::PendingPickup => BadgeColor::Warning,
        OrderStatus::OverseasWarehouse => BadgeColor::Brand,
        OrderStatus::LastMileDelivery => BadgeColor::Important,
        OrderStatus::Completed => BadgeColor::Success,
        OrderStatus::Cancelled => BadgeColor::Subtle,
    }
}

fn wms_color(status: WmsSyncStatus) -> BadgeColor {
    match status {
        WmsSyncStatus::Pending => BadgeColor::Informative,
        WmsSyncStatus::Synced => BadgeColor::Success,
        WmsSyncStatus::Failed => BadgeColor::Danger,
    }
}

fn action_icon(action: BatchAction) -> &'static str {
    match action {
        BatchAction::MarkLastMile => "truck",
        BatchAction::MarkCompleted => "check",
        BatchAction::Cancel => "delete",
        BatchAction::PushToWms => "arrow-right-left",
    }
}

/// Показывает итог пакетного действия: уведомление, диалог подтверждения
/// или блокирующее сообщение
fn show_feedback(
    result: Result<BatchOutcome, BatchError>,
    state: LogisticsOrderListState,
    notice: NoticeState,
) {
    match BatchFeedback::from_result(result) {
        BatchFeedback::Success { title, text } => notice.success(title, text),
        BatchFeedback::Confirm => state.confirm_open.set(true),
        BatchFeedback::Alert(content) => state.alert.set(Some(content)),
        BatchFeedback::Error(text) => notice.error("操作失败", text),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LogisticsOrderList() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let state = create_state(config.logistics.priority_channel);
    let board = state.board;
    let notice = NoticeState::new();

    Effect::new(move |_| {
        let filter = build_filter(&state.query.get(), &state.status.get());
        board.update(|b| b.page.set_filter(filter));
    });

    // диалог закрыт без подтверждения
    Effect::new(move |_| {
        if !state.confirm_open.get() && board.with_untracked(|b| b.pending().is_some()) {
            board.update(|b| b.cancel_pending());
        }
    });

    let run_action = move |action: BatchAction| {
        leptos::logging::log!("batch action requested: {:?}", action);
        if let Some(result) = board.try_update(|b| b.request(action)) {
            show_feedback(result, state, notice);
        }
    };

    let confirm = move |_| {
        state.confirm_open.set(false);
        if let Some(result) = board.try_update(|b| b.confirm_pending()) {
            show_feedback(result, state, notice);
        }
    };

    let cancel = move |_| {
        board.update(|b| b.cancel_pending());
        state.confirm_open.set(false);
    };

    let all_checked = Signal::derive(move || board.with(|b| b.page.all_visible_selected()));
    let some_checked = Signal::derive(move || board.with(|b| b.page.selected_count() > 0));
    let on_toggle_all = Callback::new(move |check_all: bool| {
        board.update(|b| b.page.set_all_visible(check_all));
    });
    let active_filters = Signal::derive(move || board.with(|b| b.page.active_filters_count()));
    let summary = Signal::derive(move || {
        board.with(|b| {
            format!(
                "共 {} 条, 已选 {} 条",
                b.page.visible().len(),
                b.page.selected_count()
            )
        })
    });
    let rows = move || {
        board.with(|b| b.page.visible().into_iter().cloned().collect::<Vec<LogisticsOrder>>())
    };
    let pending_title = move || {
        board.with(|b| {
            b.pending()
                .map(|p| p.action.display_name().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <PageFrame page_id="a001_logistics_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"国际物流订单"</h1>
                    <span class="page__subtitle">"跨境订单的履约状态及WMS同步"</span>
                </div>
                <div class="page__header-right">
                    <Space>
                        {BatchAction::all()
                            .into_iter()
                            .map(|action| view! {
                                <Button
                                    appearance=if action == BatchAction::PushToWms {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                    on_click=move |_| run_action(action)
                                >
                                    {icon(action_icon(action))}
                                    {format!(" {}", action.display_name())}
                                </Button>
                            })
                            .collect_view()}
                    </Space>
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
                    <FilterField label="订单号/客户" width="240px">
                        <Input value=state.query placeholder="搜索订单号或客户名称..." />
                    </FilterField>
                    <FilterField label="订单状态" width="150px">
                        <Select value=state.status>
                            <option value="">"全部状态"</option>
                            {OrderStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </FilterField>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:id="a001-order-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=all_checked
                                    indeterminate=some_checked
                                    on_change=on_toggle_all
                                />
                                <TableHeaderCell resizable=false min_width=150.0>"订单号"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"客户"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"目的地"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"状态"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"渠道"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"WMS同步"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"金额"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"创建时间"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = state.query.get();
                                rows()
                                    .into_iter()
                                    .map(|order| {
                                        let id = order.id;
                                        let checked = Signal::derive(move || board.with(|b| b.page.is_selected(id)));
                                        let on_check = Callback::new(move |value: bool| {
                                            board.update(|b| b.page.set_selected(id, value));
                                        });
                                        let order_no_hl = highlight_matches(&order.order_no, &query);
                                        let customer_name_hl = highlight_matches(&order.customer_name, &query);
                                        view! {
                                            <TableRow class:table__row--selected=move || checked.get()>
                                                <TableCellCheckbox checked=checked on_change=on_check />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="cell--mono">{order_no_hl}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{customer_name_hl}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{order.destination.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(order.status.display_name(), status_color(order.status))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class:cell--accent={order.channel == Channel::Lightcone}>
                                                            {order.channel.display_name()}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {status_badge(order.wms_sync_status.display_name(), wms_color(order.wms_sync_status))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=order.amount currency="USD" />
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime(&order.create_time)}</TableCellLayout>
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

            <Dialog open=state.confirm_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>{move || format!("确认{}", pending_title())}</DialogTitle>
                        <DialogContent>
                            <p>"以下订单将被更新为完成状态，请确认："</p>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"订单号"</TableHeaderCell>
                                        <TableHeaderCell>"客户"</TableHeaderCell>
                                        <TableHeaderCell>"当前状态"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || {
                                        board.with(|b| {
                                            b.pending_orders()
                                                .into_iter()
                                                .cloned()
                                                .map(|order| view! {
                                                    <TableRow>
                                                        <TableCell>{order.order_no.clone()}</TableCell>
                                                        <TableCell>{order.customer_name.clone()}</TableCell>
                                                        <TableCell>{order.status.display_name()}</TableCell>
                                                    </TableRow>
                                                })
                                                .collect_view()
                                        })
                                    }}
                                </TableBody>
                            </Table>
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                                "取消"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=confirm>
                                "确认完成"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <AlertDialog content=state.alert />
        </PageFrame>
    }
}
