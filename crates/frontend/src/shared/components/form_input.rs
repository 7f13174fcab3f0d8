use leptos::prelude::*;

/// Поле формы диалога с подписью.
///
/// Значение хранится снаружи (обычно в структуре формы), компонент только
/// отображает его и передаёт ввод в `on_input`.
#[component]
pub fn FormInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Звёздочка обязательного поля
    #[prop(optional)]
    required: bool,
    /// "text" по умолчанию
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">
                {required.then(|| view! { <span class="form__required">"*"</span> })}
                {label}
            </label>
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
