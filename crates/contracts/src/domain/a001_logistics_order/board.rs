//! Контроллер страницы "国际物流订单": список, выбор строк и пакетные действия
//! с двухфазным подтверждением.

use super::aggregate::{Channel, LogisticsOrder, LogisticsOrderFilter, LogisticsOrderId};
use super::batch::{self, BatchAction};
use crate::shared::error::BatchError;
use crate::shared::list::ListPage;

/// Результат запроса пакетного действия
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// Действие применено к `count` заказам, выбор очищен
    Applied { action: BatchAction, count: usize },
    /// Проверка пройдена, заказы ждут подтверждения
    AwaitingConfirmation { action: BatchAction, order_nos: Vec<String> },
}

/// Пакет, ожидающий подтверждения в диалоге
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBatch {
    pub action: BatchAction,
    pub ids: Vec<LogisticsOrderId>,
}

#[derive(Debug, Clone)]
pub struct LogisticsOrderBoard {
    pub page: ListPage<LogisticsOrder, LogisticsOrderFilter>,
    pending: Option<PendingBatch>,
    priority_channel: Channel,
}

impl LogisticsOrderBoard {
    pub fn new(orders: Vec<LogisticsOrder>, priority_channel: Channel) -> Self {
        Self {
            page: ListPage::new(orders),
            pending: None,
            priority_channel,
        }
    }

    pub fn pending(&self) -> Option<&PendingBatch> {
        self.pending.as_ref()
    }

    /// Заказы ожидающего пакета (для таблицы в диалоге подтверждения)
    pub fn pending_orders(&self) -> Vec<&LogisticsOrder> {
        match &self.pending {
            Some(pending) => self
                .page
                .items()
                .iter()
                .filter(|o| pending.ids.contains(&o.id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Запускает пакетное действие над текущим выбором
    pub fn request(&mut self, action: BatchAction) -> Result<BatchOutcome, BatchError> {
        let ids = self.page.selected_ids();

        if action.requires_confirmation() {
            let indices = batch::validate(self.page.items(), &ids, action, self.priority_channel)?;
            let order_nos = indices
                .iter()
                .map(|&i| self.page.items()[i].order_no.clone())
                .collect();
            log::debug!("{:?} awaiting confirmation for {} order(s)", action, ids.len());
            self.pending = Some(PendingBatch { action, ids });
            return Ok(BatchOutcome::AwaitingConfirmation { action, order_nos });
        }

        let count =
            batch::validate_and_apply(self.page.items_mut(), &ids, action, self.priority_channel)?;
        self.page.clear_selection();
        Ok(BatchOutcome::Applied { action, count })
    }

    /// Подтверждение: повторная проверка и применение ожидающего пакета
    pub fn confirm_pending(&mut self) -> Result<BatchOutcome, BatchError> {
        let pending = self.pending.take().ok_or(BatchError::NothingPending)?;
        let count = batch::validate_and_apply(
            self.page.items_mut(),
            &pending.ids,
            pending.action,
            self.priority_channel,
        )?;
        self.page.clear_selection();
        Ok(BatchOutcome::Applied {
            action: pending.action,
            count,
        })
    }

    /// Отмена подтверждения: заказы и выбор остаются как были
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("pending batch cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_logistics_order::aggregate::OrderStatus;
    use crate::domain::a001_logistics_order::seed::seed_orders;

    fn board() -> LogisticsOrderBoard {
        LogisticsOrderBoard::new(seed_orders(), Channel::Lightcone)
    }

    fn select(board: &mut LogisticsOrderBoard, order_nos: &[&str]) {
        let ids: Vec<_> = board
            .page
            .items()
            .iter()
            .filter(|o| order_nos.contains(&o.order_no.as_str()))
            .map(|o| o.id)
            .collect();
        for id in ids {
            board.page.set_selected(id, true);
        }
    }

    fn status_of(board: &LogisticsOrderBoard, order_no: &str) -> OrderStatus {
        board
            .page
            .items()
            .iter()
            .find(|o| o.order_no == order_no)
            .unwrap()
            .status
    }

    #[test]
    fn test_empty_selection_blocks_every_action() {
        let mut b = board();
        for action in BatchAction::all() {
            assert_eq!(b.request(action), Err(BatchError::EmptySelection));
        }
        assert!(b.pending().is_none());
    }

    #[test]
    fn test_applied_action_clears_selection() {
        let mut b = board();
        select(&mut b, &["M20250120003", "M20250120007"]);
        let outcome = b.request(BatchAction::Cancel).unwrap();
        assert_eq!(
            outcome,
            BatchOutcome::Applied {
                action: BatchAction::Cancel,
                count: 2
            }
        );
        assert_eq!(b.page.selected_count(), 0);
        assert_eq!(status_of(&b, "M20250120003"), OrderStatus::Cancelled);
    }

    #[test]
    fn test_rejected_action_keeps_selection() {
        let mut b = board();
        select(&mut b, &["M20250120001", "M20250120004"]);
        let err = b.request(BatchAction::PushToWms).unwrap_err();
        assert_eq!(
            err.rejected_order_nos(),
            &["M20250120001".to_string(), "M20250120004".to_string()]
        );
        assert_eq!(b.page.selected_count(), 2);
    }

    #[test]
    fn test_completed_requires_confirmation() {
        let mut b = board();
        select(&mut b, &["M20250120002", "M20250120006"]);
        let outcome = b.request(BatchAction::MarkCompleted).unwrap();
        assert_eq!(
            outcome,
            BatchOutcome::AwaitingConfirmation {
                action: BatchAction::MarkCompleted,
                order_nos: vec!["M20250120002".into(), "M20250120006".into()],
            }
        );
        assert_eq!(b.pending_orders().len(), 2);
        assert_eq!(status_of(&b, "M20250120002"), OrderStatus::LastMileDelivery);

        let confirmed = b.confirm_pending().unwrap();
        assert_eq!(
            confirmed,
            BatchOutcome::Applied {
                action: BatchAction::MarkCompleted,
                count: 2
            }
        );
        assert_eq!(status_of(&b, "M20250120002"), OrderStatus::Completed);
        assert_eq!(status_of(&b, "M20250120006"), OrderStatus::Completed);
        assert_eq!(b.page.selected_count(), 0);
        assert!(b.pending().is_none());
    }

    #[test]
    fn test_cancelling_confirmation_changes_nothing() {
        let mut b = board();
        select(&mut b, &["M20250120002"]);
        let before = b.page.items().to_vec();
        b.request(BatchAction::MarkCompleted).unwrap();
        b.cancel_pending();
        assert!(b.pending().is_none());
        assert_eq!(b.page.items(), before.as_slice());
        assert_eq!(b.page.selected_count(), 1);
        assert_eq!(b.confirm_pending(), Err(BatchError::NothingPending));
    }

    #[test]
    fn test_confirmation_revalidates() {
        let mut b = board();
        select(&mut b, &["M20250120002"]);
        b.request(BatchAction::MarkCompleted).unwrap();
        // заказ сменил статус между проверкой и подтверждением
        let id = b.page.selected_ids()[0];
        b.page.update(id, |o| o.status = OrderStatus::Completed).unwrap();
        let err = b.confirm_pending().unwrap_err();
        assert_eq!(err.rejected_order_nos(), &["M20250120002".to_string()]);
        assert!(b.pending().is_none());
    }
}
