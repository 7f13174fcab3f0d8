//! Всплывающие уведомления об итогах действий на странице.

use leptos::prelude::*;
use thaw::*;

const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

/// Уведомление страницы; новое сообщение заменяет предыдущее
#[derive(Clone, Copy)]
pub struct NoticeState {
    current: RwSignal<Option<(u64, Notice)>>,
    counter: StoredValue<u64>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            counter: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, text: impl Into<String>) {
        self.show(NoticeKind::Success, title.into(), text.into());
    }

    pub fn warning(&self, title: impl Into<String>, text: impl Into<String>) {
        self.show(NoticeKind::Warning, title.into(), text.into());
    }

    pub fn error(&self, title: impl Into<String>, text: impl Into<String>) {
        self.show(NoticeKind::Error, title.into(), text.into());
    }

    fn show(&self, kind: NoticeKind, title: String, text: String) {
        self.counter.update_value(|c| *c += 1);
        let ticket = self.counter.get_value();
        self.current.set(Some((ticket, Notice { kind, title, text })));

        // скрываем только своё сообщение, более новое остаётся
        let current = self.current;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if current.with_untracked(|n| n.as_ref().map(|(t, _)| *t) == Some(ticket)) {
                current.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeHost(state: NoticeState) -> impl IntoView {
    view! {
        {move || state.current.get().map(|(_, notice)| {
            let intent = match notice.kind {
                NoticeKind::Success => MessageBarIntent::Success,
                NoticeKind::Warning => MessageBarIntent::Warning,
                NoticeKind::Error => MessageBarIntent::Error,
            };
            view! {
                <div class="notice-host" on:click=move |_| state.dismiss()>
                    <MessageBar intent=intent>
                        <div class="notice-host__body">
                            <strong>{notice.title}</strong>
                            <span>{notice.text}</span>
                        </div>
                    </MessageBar>
                </div>
            }
        })}
    }
}
