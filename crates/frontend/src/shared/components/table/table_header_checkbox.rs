//! Чекбокс в заголовке таблицы: выбрать/снять все видимые строки

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Три состояния: ничего не выбрано, выбраны все видимые строки, выбраны
/// некоторые (indeterminate)
#[component]
pub fn TableHeaderCheckbox(
    /// Все видимые строки выбраны
    #[prop(into)]
    checked: Signal<bool>,

    /// Выбрана хотя бы одна строка, но не все
    #[prop(into)]
    indeterminate: Signal<bool>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate задаётся только через DOM-свойство
    Effect::new(move |_| {
        let is_indeterminate = indeterminate.get() && !checked.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}
