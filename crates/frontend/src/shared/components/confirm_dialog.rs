use leptos::prelude::*;
use thaw::*;

/// Подтверждение необратимого действия; `on_confirm` вызывается после
/// закрытия диалога
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    #[prop(optional, into)]
    confirm_label: Option<String>,
    on_confirm: Callback<()>,
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "确定".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <p>{move || message.get()}</p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                open.set(false);
                                if let Some(cancel) = on_cancel {
                                    cancel.run(());
                                }
                            }
                        >
                            "取消"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {confirm_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
