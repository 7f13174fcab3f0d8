use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use contracts::shared::config::ConsoleConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match ConsoleConfig::load_default() {
        Ok(config) => config,
        Err(err) => {
            log::error!("failed to load console configuration: {:#}", err);
            let message = format!("配置加载失败: {:#}", err);
            return view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            }
            .into_any();
        }
    };

    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
    .into_any()
}
