//! Ячейка таблицы для денежных значений

use contracts::shared::format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Два знака после запятой, разделитель тысяч, выравнивание вправо.
/// При `color_by_sign` отрицательные значения выделяются красным,
/// положительные зелёным.
#[component]
pub fn TableCellMoney(
    value: f64,

    /// Код валюты после суммы, если задан
    #[prop(optional)]
    currency: Option<&'static str>,

    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted = match currency {
        Some(code) => format!("{} {}", format_money(value), code),
        None => format_money(value),
    };

    let mut styles = Vec::new();
    if color_by_sign {
        if value > 0.0 {
            styles.push("color: var(--color-success-700)");
        } else if value < 0.0 {
            styles.push("color: var(--color-error-700)");
        }
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <TableCell class="text-right">
            <span style=styles.join("; ")>{formatted}</span>
        </TableCell>
    }
}
