//! Ошибки операций консоли.
//!
//! Текст ошибок: сообщение, которое страница показывает пользователю
//! (диалог или блок `alert--error`), поэтому формулировки на китайском.

use thiserror::Error;

/// Ошибки пакетной смены статуса заказов (a001)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// Ничего не выбрано: блокирующее уведомление, дальнейших действий нет
    #[error("请先选择订单")]
    EmptySelection,

    /// Выбранный ID отсутствует в списке страницы
    #[error("订单不存在: {0}")]
    UnknownOrder(String),

    /// Хотя бы один заказ не прошёл проверку, пакет отклонён целиком
    #[error("{message}")]
    Rejected {
        message: String,
        order_nos: Vec<String>,
    },

    /// Подтверждение вызвано без ожидающего пакета
    #[error("没有待确认的批量操作")]
    NothingPending,
}

impl BatchError {
    /// Номера заказов, из-за которых пакет отклонён
    pub fn rejected_order_nos(&self) -> &[String] {
        match self {
            BatchError::Rejected { order_nos, .. } => order_nos,
            _ => &[],
        }
    }
}

/// Ошибки выгрузки в таблицу
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("请先勾选需要导出的数据")]
    NothingSelected,

    #[error("没有可导出的数据")]
    NoRows,
}

/// Ошибки редактирования записей списочных страниц
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("记录不存在: {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("报价已确认: {0}")]
    AlreadyConfirmed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_carries_order_numbers() {
        let err = BatchError::Rejected {
            message: "失败".into(),
            order_nos: vec!["M1".into(), "M2".into()],
        };
        assert_eq!(err.rejected_order_nos(), &["M1".to_string(), "M2".to_string()]);
        assert_eq!(err.to_string(), "失败");
        assert!(BatchError::EmptySelection.rejected_order_nos().is_empty());
    }
}
