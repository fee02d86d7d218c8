mod form;
mod view;

pub use form::ProposalForm;
pub use view::ProposalView;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys::PROPOSALS;
use leptos::prelude::*;

/// Ветка «нет такой записи» для карточки и формы
#[component]
fn ProposalNotFound(id: String, tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="page page--centered">
            <div class="empty-state">
                <h2 class="empty-state__title">"Proposal not found"</h2>
                <p class="empty-state__text">
                    {format!("There is no proposal with id '{}'.", id)}
                </p>
                <button
                    class="button button--primary"
                    on:click=move |_| ctx.replace_tab(&tab_key, PROPOSALS)
                >
                    "Back to proposals"
                </button>
            </div>
        </div>
    }
}
