//! Transient notifications shown in the corner of the panel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn intent(&self) -> MessageBarIntent {
        match self {
            NotificationKind::Success => MessageBarIntent::Success,
            NotificationKind::Error => MessageBarIntent::Error,
        }
    }

    fn default_title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Éxito",
            NotificationKind::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title: kind.default_title().to_string(),
                message: message.into(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

/// Renders the active notifications. Mounted once next to `ModalHost`.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = expect_context::<NotificationService>();

    view! {
        <div class="notifications">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class="notifications__item" on:click=move |_| svc.dismiss(id)>
                            <MessageBar intent=n.kind.intent()>
                                <MessageBarBody>
                                    <MessageBarTitle>{n.title}</MessageBarTitle>
                                    {n.message}
                                </MessageBarBody>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_titles() {
        assert_eq!(NotificationKind::Success.default_title(), "Éxito");
        assert_eq!(NotificationKind::Error.default_title(), "Error");
    }
}
