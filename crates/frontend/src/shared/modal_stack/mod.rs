//! Stack of open dialogs: composer, detail, preview, confirmations.
//!
//! Dialogs may open on top of each other (a limit warning over the
//! composer); Escape and overlay clicks only close the topmost one.

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

/// Surface width of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Small => "modal--sm",
            ModalSize::Medium => "modal--md",
            ModalSize::Large => "modal--lg",
        }
    }
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    size: ModalSize,
    builder: ModalBuilder,
}

/// Lets a dialog close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Pushes a dialog; Escape and overlay clicks close it.
    pub fn open<F>(&self, size: ModalSize, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push(size, Arc::new(builder))
    }

    fn push(&self, size: ModalSize, builder: ModalBuilder) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                size,
                builder,
            })
        });
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Closes on the next tick, so the DOM event that triggered it finishes first.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    /// User-initiated close of the topmost dialog.
    fn dismiss_top(&self) {
        if let Some(id) = self.stack.with_untracked(|s| s.last().map(|e| e.id)) {
            self.close_deferred(id);
        }
    }
}

/// Renders the stack. Mount exactly once, at the root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = expect_context::<ModalStackService>();

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map(|k| k.key() == "Escape")
                .unwrap_or(false);
            if is_escape && svc.is_open() {
                svc.dismiss_top();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            // lives as long as the page
            on_keydown.forget();
        }
    });

    view! {
        <For
            each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
            key=|(_, entry)| entry.id
            children=move |(depth, entry)| {
                let id = entry.id;
                let on_overlay = Callback::new(move |_| svc.close_deferred(id));
                let content = (entry.builder)(ModalHandle { id, svc });
                view! {
                    <ModalFrame
                        z_index=1000 + depth as i32
                        size_class=entry.size.class()
                        on_overlay=on_overlay
                    >
                        {content}
                    </ModalFrame>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(ModalSize::default(), ModalSize::Medium);
        assert_eq!(ModalSize::Small.class(), "modal--sm");
        assert_eq!(ModalSize::Large.class(), "modal--lg");
    }
}
