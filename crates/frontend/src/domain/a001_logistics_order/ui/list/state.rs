use crate::shared::components::alert_dialog::AlertContent;
use crate::shared::list_utils::pick_by_code;
use contracts::domain::a001_logistics_order::aggregate::{
    Channel, LogisticsOrderFilter, OrderStatus,
};
use contracts::domain::a001_logistics_order::board::{BatchOutcome, LogisticsOrderBoard};
use contracts::domain::a001_logistics_order::seed::seed_orders;
use contracts::shared::error::BatchError;
use leptos::prelude::*;

/// Реакция страницы на результат пакетного действия
#[derive(Debug, Clone, PartialEq)]
pub enum BatchFeedback {
    Success { title: String, text: String },
    /// Открыть диалог подтверждения
    Confirm,
    /// Блокирующее сообщение
    Alert(AlertContent),
    Error(String),
}

impl BatchFeedback {
    pub fn from_result(result: Result<BatchOutcome, BatchError>) -> Self {
        match result {
            Ok(BatchOutcome::Applied { action, count }) => {
                let (title, text) = action.success_message();
                BatchFeedback::Success {
                    title: title.to_string(),
                    text: format!("{} 条订单{}", count, text),
                }
            }
            Ok(BatchOutcome::AwaitingConfirmation { .. }) => BatchFeedback::Confirm,
            Err(BatchError::EmptySelection) => BatchFeedback::Alert(AlertContent {
                title: "提示".to_string(),
                message: BatchError::EmptySelection.to_string(),
                items: Vec::new(),
            }),
            Err(BatchError::Rejected { message, order_nos }) => BatchFeedback::Alert(AlertContent {
                title: "操作失败".to_string(),
                message,
                items: order_nos,
            }),
            Err(e) => BatchFeedback::Error(e.to_string()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LogisticsOrderListState {
    pub board: RwSignal<LogisticsOrderBoard>,
    pub query: RwSignal<String>,
    pub status: RwSignal<String>,
    pub is_filter_expanded: RwSignal<bool>,
    pub confirm_open: RwSignal<bool>,
    pub alert: RwSignal<Option<AlertContent>>,
}

impl LogisticsOrderListState {
    pub fn reset(&self) {
        self.query.set(String::new());
        self.status.set(String::new());
        self.board.update(|b| b.page.reset_filter());
    }
}

pub fn build_filter(query: &str, status: &str) -> LogisticsOrderFilter {
    LogisticsOrderFilter {
        query: query.trim().to_string(),
        status: pick_by_code(OrderStatus::all(), status, |s| s.code()),
    }
}

pub fn create_state(priority_channel: Channel) -> LogisticsOrderListState {
    LogisticsOrderListState {
        board: RwSignal::new(LogisticsOrderBoard::new(seed_orders(), priority_channel)),
        query: RwSignal::new(String::new()),
        status: RwSignal::new(String::new()),
        is_filter_expanded: RwSignal::new(true),
        confirm_open: RwSignal::new(false),
        alert: RwSignal::new(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_logistics_order::batch::BatchAction;

    fn board() -> LogisticsOrderBoard {
        LogisticsOrderBoard::new(seed_orders(), Channel::Lightcone)
    }

    #[test]
    fn test_empty_selection_is_blocking_alert() {
        let mut b = board();
        let feedback = BatchFeedback::from_result(b.request(BatchAction::Cancel));
        match feedback {
            BatchFeedback::Alert(content) => {
                assert_eq!(content.message, "请先选择订单");
                assert!(content.items.is_empty());
            }
            other => panic!("unexpected feedback: {:?}", other),
        }
    }

    #[test]
    fn test_rejection_lists_order_numbers() {
        let mut b = board();
        let completed = b
            .page
            .items()
            .iter()
            .find(|o| o.status == OrderStatus::Completed)
            .map(|o| o.id)
            .unwrap();
        b.page.set_selected(completed, true);

        let feedback = BatchFeedback::from_result(b.request(BatchAction::Cancel));
        match feedback {
            BatchFeedback::Alert(content) => {
                assert_eq!(content.title, "操作失败");
                assert_eq!(content.items, vec!["M20250120004".to_string()]);
            }
            other => panic!("unexpected feedback: {:?}", other),
        }
    }

    #[test]
    fn test_mark_completed_asks_for_confirmation() {
        let mut b = board();
        let last_mile = b
            .page
            .items()
            .iter()
            .find(|o| o.status == OrderStatus::LastMileDelivery)
            .map(|o| o.id)
            .unwrap();
        b.page.set_selected(last_mile, true);

        let feedback = BatchFeedback::from_result(b.request(BatchAction::MarkCompleted));
        assert_eq!(feedback, BatchFeedback::Confirm);

        let feedback = BatchFeedback::from_result(b.confirm_pending());
        assert_eq!(
            feedback,
            BatchFeedback::Success {
                title: "系统批量更新订单状态成功".to_string(),
                text: "1 条订单已更新为完成".to_string(),
            }
        );
    }

    #[test]
    fn test_build_filter() {
        let f = build_filter(" acme ", "COMPLETED");
        assert_eq!(f.query, "acme");
        assert_eq!(f.status, Some(OrderStatus::Completed));
    }
}
