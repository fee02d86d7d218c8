use super::ProposalNotFound;
use crate::domain::a001_proposal::api::fetch_proposal;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys::PROPOSALS;
use crate::layout::tabs::{detail_tab_label, TabRoute};
use crate::shared::api_utils::Fetched;
use crate::shared::components::StatusBadge;
use contracts::domain::a001_proposal::Proposal;
use contracts::shared::format::{format_date, format_inr};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Карточка предложения (только чтение)
#[component]
pub fn ProposalView(id: String, tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let state = RwSignal::new(None::<Result<Fetched<Proposal>, String>>);

    {
        let id = id.clone();
        let tab_key = tab_key.clone();
        spawn_local(async move {
            let result = fetch_proposal(&id).await;
            if let Ok(Fetched::Found(p)) = &result {
                ctx.update_tab_title(&tab_key, &detail_tab_label("Proposal", &p.proposal_number));
            }
            state.set(Some(result));
        });
    }

    let id = StoredValue::new(id);
    let tab_key = StoredValue::new(tab_key);

    move || match state.get() {
        None => view! { <div class="page__loading">"Loading..."</div> }.into_any(),
        Some(Err(e)) => view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        }
        .into_any(),
        Some(Ok(Fetched::NotFound)) => view! {
            <ProposalNotFound id=id.get_value() tab_key=tab_key.get_value() />
        }
        .into_any(),
        Some(Ok(Fetched::Found(p))) => {
            let edit_key = TabRoute::ProposalEdit(p.id.clone()).key();
            view! {
                <div class="page">
                    <div class="header">
                        <div class="header__content">
                            <h1 class="header__title">{p.title.clone()}</h1>
                            <StatusBadge variant=p.status.badge_variant() label=p.status.display_name() />
                        </div>
                        <div class="header__actions">
                            <button class="button button--primary" on:click=move |_| ctx.navigate(&edit_key)>
                                "Edit"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| ctx.replace_tab(&tab_key.get_value(), PROPOSALS)
                            >
                                "Back to proposals"
                            </button>
                        </div>
                    </div>

                    <dl class="details-grid">
                        <dt>"Number"</dt>
                        <dd>{p.proposal_number.clone()}</dd>
                        <dt>"Customer"</dt>
                        <dd>{p.customer_name.clone()}</dd>
                        <dt>"Contact"</dt>
                        <dd>{p.contact_email.clone()}</dd>
                        <dt>"Total value"</dt>
                        <dd>{format_inr(p.total_value)}</dd>
                        <dt>"Valid until"</dt>
                        <dd>{format_date(p.valid_until)}</dd>
                        <dt>"Created"</dt>
                        <dd>{format_date(p.created_date)}</dd>
                        <dt>"Sections"</dt>
                        <dd>{p.sections}</dd>
                        <dt>"Views"</dt>
                        <dd>{p.views}</dd>
                    </dl>
                </div>
            }
            .into_any()
        }
    }
}
