//! TopHeader - верхняя панель приложения: название и переключатель навигации.

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Interiors ERP"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { "⟨" } else { "☰" }}
                </button>
                <span class="top-header__tabs-count">
                    {move || format!("Open tabs: {}", ctx.opened.get().len())}
                </span>
            </div>
        </div>
    }
}
