//! Пакетная смена статуса заказов.
//!
//! Пакет принимается целиком или отклоняется целиком: если хотя бы один
//! выбранный заказ не подходит под действие, ни один заказ не меняется.

use super::aggregate::{Channel, LogisticsOrder, LogisticsOrderId, OrderStatus, WmsSyncStatus};
use crate::domain::common::AggregateId;
use crate::shared::error::BatchError;
use serde::{Deserialize, Serialize};

/// Пакетное действие над выбранными заказами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatchAction {
    /// 批量更新末端派送
    MarkLastMile,
    /// 批量更新完成 (с подтверждением)
    MarkCompleted,
    /// 批量更新取消
    Cancel,
    /// 推送WMS
    PushToWms,
}

impl BatchAction {
    pub fn all() -> Vec<BatchAction> {
        vec![
            BatchAction::MarkLastMile,
            BatchAction::MarkCompleted,
            BatchAction::Cancel,
            BatchAction::PushToWms,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BatchAction::MarkLastMile => "批量更新末端派送",
            BatchAction::MarkCompleted => "批量更新完成",
            BatchAction::Cancel => "批量更新取消",
            BatchAction::PushToWms => "推送WMS",
        }
    }

    /// Единственный допустимый исходный статус (для действий со статусом)
    pub fn required_status(&self) -> Option<OrderStatus> {
        match self {
            BatchAction::MarkLastMile => Some(OrderStatus::OverseasWarehouse),
            BatchAction::MarkCompleted => Some(OrderStatus::LastMileDelivery),
            BatchAction::Cancel => Some(OrderStatus::PendingPickup),
            BatchAction::PushToWms => None,
        }
    }

    pub fn target_status(&self) -> Option<OrderStatus> {
        match self {
            BatchAction::MarkLastMile => Some(OrderStatus::LastMileDelivery),
            BatchAction::MarkCompleted => Some(OrderStatus::Completed),
            BatchAction::Cancel => Some(OrderStatus::Cancelled),
            BatchAction::PushToWms => None,
        }
    }

    /// Требует ли действие подтверждения перед применением
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, BatchAction::MarkCompleted)
    }

    pub fn rejection_message(&self) -> &'static str {
        match self {
            BatchAction::MarkLastMile => "系统批量更新订单状态失败，存在非境外仓状态的订单信息",
            BatchAction::MarkCompleted => "系统批量更新订单状态失败，存在非末端派送中状态的订单信息",
            BatchAction::Cancel => {
                "系统批量更新订单状态失败，存在无法取消状态的订单（仅待揽收订单可取消）"
            }
            BatchAction::PushToWms => "推送WMS失败：包含光锥渠道订单（无需推送），请重新选择。",
        }
    }

    /// Заголовок и описание уведомления об успехе
    pub fn success_message(&self) -> (&'static str, &'static str) {
        match self {
            BatchAction::MarkLastMile => ("系统批量更新订单状态成功", "已更新为末端派送中"),
            BatchAction::MarkCompleted => ("系统批量更新订单状态成功", "已更新为完成"),
            BatchAction::Cancel => ("系统批量更新订单状态成功", "已更新为已取消"),
            BatchAction::PushToWms => ("推送WMS成功", "订单信息已同步至华磊系统"),
        }
    }

    /// Подходит ли заказ под действие
    pub fn accepts(&self, order: &LogisticsOrder, priority_channel: Channel) -> bool {
        match self.required_status() {
            Some(required) => order.status == required,
            None => order.channel != priority_channel,
        }
    }

    fn apply_to(&self, order: &mut LogisticsOrder) {
        match self.target_status() {
            Some(target) => order.status = target,
            None => order.wms_sync_status = WmsSyncStatus::Synced,
        }
    }
}

/// Проверяет пакет без изменений. Возвращает индексы выбранных заказов в
/// порядке списка.
pub fn validate(
    orders: &[LogisticsOrder],
    selected_ids: &[LogisticsOrderId],
    action: BatchAction,
    priority_channel: Channel,
) -> Result<Vec<usize>, BatchError> {
    if selected_ids.is_empty() {
        return Err(BatchError::EmptySelection);
    }

    let mut unique: Vec<LogisticsOrderId> = Vec::with_capacity(selected_ids.len());
    for id in selected_ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }

    if let Some(missing) = unique
        .iter()
        .find(|id| !orders.iter().any(|o| o.id == **id))
    {
        return Err(BatchError::UnknownOrder(missing.as_string()));
    }

    let indices: Vec<usize> = orders
        .iter()
        .enumerate()
        .filter(|(_, o)| unique.contains(&o.id))
        .map(|(i, _)| i)
        .collect();

    let offending: Vec<String> = indices
        .iter()
        .map(|&i| &orders[i])
        .filter(|o| !action.accepts(o, priority_channel))
        .map(|o| o.order_no.clone())
        .collect();

    if !offending.is_empty() {
        return Err(BatchError::Rejected {
            message: action.rejection_message().to_string(),
            order_nos: offending,
        });
    }

    Ok(indices)
}

/// Проверяет и применяет пакет. Возвращает число изменённых заказов;
/// при ошибке заказы не меняются.
pub fn validate_and_apply(
    orders: &mut [LogisticsOrder],
    selected_ids: &[LogisticsOrderId],
    action: BatchAction,
    priority_channel: Channel,
) -> Result<usize, BatchError> {
    let indices = match validate(orders, selected_ids, action, priority_channel) {
        Ok(indices) => indices,
        Err(err) => {
            log::warn!("{:?} rejected: {}", action, err);
            return Err(err);
        }
    };

    for &i in &indices {
        action.apply_to(&mut orders[i]);
    }

    log::info!("{:?} applied to {} order(s)", action, indices.len());
    Ok(indices.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_logistics_order::seed::seed_orders;

    fn id_of(orders: &[LogisticsOrder], order_no: &str) -> LogisticsOrderId {
        orders.iter().find(|o| o.order_no == order_no).unwrap().id
    }

    #[test]
    fn test_last_mile_applies_when_all_in_overseas_warehouse() {
        let mut orders = seed_orders();
        let ids = [id_of(&orders, "M20250120001"), id_of(&orders, "M20250120005")];
        let applied =
            validate_and_apply(&mut orders, &ids, BatchAction::MarkLastMile, Channel::Lightcone).unwrap();
        assert_eq!(applied, 2);
        for id in ids {
            let order = orders.iter().find(|o| o.id == id).unwrap();
            assert_eq!(order.status, OrderStatus::LastMileDelivery);
        }
    }

    #[test]
    fn test_one_disqualified_order_blocks_whole_batch() {
        let mut orders = seed_orders();
        let before = orders.clone();
        let ids = [
            id_of(&orders, "M20250120001"),
            id_of(&orders, "M20250120003"),
            id_of(&orders, "M20250120005"),
        ];
        let err = validate_and_apply(&mut orders, &ids, BatchAction::MarkLastMile, Channel::Lightcone)
            .unwrap_err();
        assert_eq!(err.rejected_order_nos(), &["M20250120003".to_string()]);
        assert_eq!(
            err.to_string(),
            "系统批量更新订单状态失败，存在非境外仓状态的订单信息"
        );
        assert_eq!(orders, before);
    }

    #[test]
    fn test_cancel_rejects_completed_order() {
        let mut orders = seed_orders();
        let before = orders.clone();
        let ids = [
            id_of(&orders, "M20250120003"),
            id_of(&orders, "M20250120004"),
            id_of(&orders, "M20250120007"),
        ];
        let err =
            validate_and_apply(&mut orders, &ids, BatchAction::Cancel, Channel::Lightcone).unwrap_err();
        assert_eq!(err.rejected_order_nos(), &["M20250120004".to_string()]);
        assert_eq!(orders, before);
    }

    #[test]
    fn test_offending_orders_reported_in_list_order() {
        let mut orders = seed_orders();
        let ids = [
            id_of(&orders, "M20250120008"),
            id_of(&orders, "M20250120002"),
            id_of(&orders, "M20250120006"),
        ];
        let err = validate_and_apply(&mut orders, &ids, BatchAction::MarkCompleted, Channel::Lightcone)
            .unwrap_err();
        assert_eq!(err.rejected_order_nos(), &["M20250120008".to_string()]);
    }

    #[test]
    fn test_push_to_wms_rejects_priority_channel() {
        let mut orders = seed_orders();
        let before = orders.clone();
        let ids = [id_of(&orders, "M20250120002"), id_of(&orders, "M20250120006")];
        let err =
            validate_and_apply(&mut orders, &ids, BatchAction::PushToWms, Channel::Lightcone).unwrap_err();
        assert_eq!(err.rejected_order_nos(), &["M20250120006".to_string()]);
        assert_eq!(orders, before);
    }

    #[test]
    fn test_push_to_wms_ignores_status() {
        let mut orders = seed_orders();
        let ids = [id_of(&orders, "M20250120003"), id_of(&orders, "M20250120008")];
        let applied =
            validate_and_apply(&mut orders, &ids, BatchAction::PushToWms, Channel::Lightcone).unwrap();
        assert_eq!(applied, 2);
        for id in ids {
            let order = orders.iter().find(|o| o.id == id).unwrap();
            assert_eq!(order.wms_sync_status, WmsSyncStatus::Synced);
        }
        let cancelled = orders.iter().find(|o| o.order_no == "M20250120008").unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_empty_selection_is_precondition_error() {
        let mut orders = seed_orders();
        let err =
            validate_and_apply(&mut orders, &[], BatchAction::Cancel, Channel::Lightcone).unwrap_err();
        assert_eq!(err, BatchError::EmptySelection);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let mut orders = seed_orders();
        let id = id_of(&orders, "M20250120007");
        let applied =
            validate_and_apply(&mut orders, &[id, id, id], BatchAction::Cancel, Channel::Lightcone).unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_unknown_id_is_an_error_not_a_skip() {
        let mut orders = seed_orders();
        let before = orders.clone();
        let known = id_of(&orders, "M20250120007");
        let unknown = LogisticsOrderId::new(uuid::Uuid::from_u128(1));
        let err = validate_and_apply(&mut orders, &[known, unknown], BatchAction::Cancel, Channel::Lightcone)
            .unwrap_err();
        assert!(matches!(err, BatchError::UnknownOrder(_)));
        assert_eq!(orders, before);
    }

    #[test]
    fn test_terminal_orders_never_accepted_by_status_actions() {
        let orders = seed_orders();
        for action in BatchAction::all() {
            if action.required_status().is_none() {
                continue;
            }
            for order in orders.iter().filter(|o| o.status.is_terminal()) {
                assert!(!action.accepts(order, Channel::Lightcone));
            }
        }
    }
}
