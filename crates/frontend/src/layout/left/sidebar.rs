//! Боковое меню: дерево групп и страниц из `contracts::shared::navigation`.
//! Неактивные пункты отображаются, но не реагируют на клик.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::{MenuItem, MENU};
use leptos::prelude::*;

const EXPANDED_STORAGE_KEY: &str = "sidebar_expanded_groups";

fn load_expanded_groups() -> Vec<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(EXPANDED_STORAGE_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_expanded_groups(groups: &[String]) {
    let Ok(json) = serde_json::to_string(groups) else {
        return;
    };
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(EXPANDED_STORAGE_KEY, &json);
    }
}

#[component]
fn SidebarLeaf(item: &'static MenuItem, padding: &'static str) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let enabled = item.is_enabled();
    let key = item.key();
    let icon_name = match item {
        MenuItem::Leaf { icon, .. } | MenuItem::Group { icon, .. } => *icon,
    };

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || {
                ctx.active.get().as_deref() == Some(key)
            }
            class:app-sidebar__item--disabled=!enabled
            style:padding-left=padding
            on:click=move |_| {
                if let Some(page) = item.target() {
                    ctx.open_page(page);
                }
            }
        >
            <div class="app-sidebar__item-content">
                {icon(icon_name)}
                <span>{item.title()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let expanded_groups = RwSignal::new(load_expanded_groups());

    Effect::new(move |_| {
        expanded_groups.with(|groups| save_expanded_groups(groups));
    });

    view! {
        <div class="app-sidebar__content">
            {MENU
                .iter()
                .map(|item| match item {
                    MenuItem::Leaf { .. } => {
                        view! { <SidebarLeaf item=item padding="12px" /> }.into_any()
                    }
                    MenuItem::Group { key, title, icon: icon_name, enabled, children } => {
                        let group_id = key.to_string();
                        let group_for_chevron = group_id.clone();
                        let group_for_show = group_id.clone();
                        let enabled = *enabled;
                        view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--disabled=!enabled
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        if !enabled {
                                            return;
                                        }
                                        let gid = group_id.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{*title}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            expanded_groups.get().contains(&group_for_chevron)
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>

                                <Show when=move || expanded_groups.get().contains(&group_for_show)>
                                    <div class="app-sidebar__children">
                                        {children
                                            .iter()
                                            .map(|child| view! { <SidebarLeaf item=child padding="10px" /> })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}
