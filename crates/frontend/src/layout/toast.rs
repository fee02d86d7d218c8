//! Всплывающие уведомления.
//!
//! Страницы вызывают [`ToastService::show`]; уведомление исчезает само через
//! [`TOAST_TIMEOUT_MS`] или по клику.

use leptos::prelude::*;
use leptos::task::spawn_local;

pub const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
    Info,
}

impl ToastVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            variant,
        };
        log::debug!("toast {:?}: {}", toast.variant, toast.title);

        let id = toast.id.clone();
        self.toasts.update(|list| list.push(toast));

        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            this.dismiss(&id);
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title, description, ToastVariant::Success);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title, description, ToastVariant::Error);
    }

    pub fn dismiss(&self, id: &str) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Стопка уведомлений в углу экрана
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast.variant.css_class() on:click=move |_| service.dismiss(&id)>
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__description">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
