use leptos::prelude::*;

/// Поле даты с нативным календарём, значение в формате yyyy-mm-dd
#[component]
pub fn DateInput(
    #[prop(into)]
    value: RwSignal<String>,
    #[prop(optional)] style: Option<&'static str>,
) -> impl IntoView {
    let default_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 140px;";

    view! {
        <input
            type="date"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            style=style.unwrap_or(default_style)
        />
    }
}
