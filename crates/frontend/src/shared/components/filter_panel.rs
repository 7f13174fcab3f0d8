use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Сворачиваемая панель фильтров списочной страницы.
///
/// Кнопки "查询"/"重置" выводятся после полей, если переданы обработчики.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Текст справа в заголовке, например "共 12 条"
    #[prop(optional, into)]
    summary: Option<Signal<String>>,

    /// Активные условия в виде чипов под полями
    #[prop(optional)]
    tags: Option<AnyView>,

    #[prop(optional)]
    on_search: Option<Callback<()>>,

    #[prop(optional)]
    on_reset: Option<Callback<()>>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"筛选条件"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {summary.map(|s| view! { <span class="filter-panel__summary">{move || s.get()}</span> })}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End style="flex-wrap: wrap;">
                        {children()}
                        {on_search.map(|search| view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| search.run(())
                            >
                                {icon("search")}
                                " 查询"
                            </Button>
                        })}
                        {on_reset.map(|reset| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset.run(())
                            >
                                {icon("refresh")}
                                " 重置"
                            </Button>
                        })}
                    </Flex>
                    {tags.map(|tags| view! {
                        <div class="filter-panel__tags">{tags}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Поле фильтра: подпись над элементом ввода
#[component]
pub fn FilterField(
    #[prop(into)]
    label: String,
    #[prop(optional)]
    width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let style = format!("min-width: {};", width.unwrap_or("180px"));
    view! {
        <div style=style>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>{label}</Label>
                {children()}
            </Flex>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}
