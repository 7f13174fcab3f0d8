use leptos::prelude::*;
use thaw::*;

/// Содержимое блокирующего сообщения
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertContent {
    pub title: String,
    pub message: String,
    /// Номера записей, из-за которых действие отклонено
    pub items: Vec<String>,
}

/// Модальное сообщение об отказе; закрывается кнопкой "知道了"
#[component]
pub fn AlertDialog(content: RwSignal<Option<AlertContent>>) -> impl IntoView {
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        open.set(content.with(|c| c.is_some()));
    });
    Effect::new(move |_| {
        if !open.get() && content.with_untracked(|c| c.is_some()) {
            content.set(None);
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || content.get().map(|c| c.title).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        {move || content.get().map(|c| view! {
                            <div class="alert-dialog">
                                <p>{c.message}</p>
                                {(!c.items.is_empty()).then(|| view! {
                                    <ul class="alert-dialog__items">
                                        {c.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                    </ul>
                                })}
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| content.set(None)
                        >
                            "知道了"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
