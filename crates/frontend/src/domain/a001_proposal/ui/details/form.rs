use super::ProposalNotFound;
use crate::domain::a001_proposal::api::fetch_proposal;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys::PROPOSALS;
use crate::layout::toast::use_toast;
use crate::shared::api_utils::Fetched;
use crate::shared::components::form_field::field_error;
use crate::shared::components::{FormProgressBar, NumberField, TextField};
use contracts::domain::a001_proposal::draft::{TAB_DETAILS, TAB_PRICING};
use contracts::domain::a001_proposal::ProposalDraft;
use contracts::shared::metadata::{submit, FormProgress, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
enum FormState {
    Loading,
    Ready,
    NotFound,
    Failed(String),
}

/// Создание (`id = None`) и редактирование предложения.
///
/// Проверка обязательных полей локальная: при ошибке форма остаётся открытой
/// с сообщениями у полей, при успехе вкладка закрывается и открывается список.
#[component]
pub fn ProposalForm(id: Option<String>, tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();

    let is_edit = id.is_some();
    let draft = RwSignal::new(ProposalDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let active_tab = RwSignal::new(TAB_DETAILS);
    let state = RwSignal::new(if is_edit { FormState::Loading } else { FormState::Ready });

    if let Some(id) = id.clone() {
        spawn_local(async move {
            match fetch_proposal(&id).await {
                Ok(Fetched::Found(p)) => {
                    draft.set(ProposalDraft::from_proposal(&p));
                    state.set(FormState::Ready);
                }
                Ok(Fetched::NotFound) => state.set(FormState::NotFound),
                Err(e) => state.set(FormState::Failed(e)),
            }
        });
    }

    let progress = Signal::derive(move || draft.with(FormProgress::of));
    let tabs_with_errors = Memo::new(move |_| errors.with(|e| e.tabs_with_errors::<ProposalDraft>()));

    let tab_key = StoredValue::new(tab_key);
    let record_id = StoredValue::new(id.unwrap_or_default());

    let on_submit = move |_| {
        let current = draft.get_untracked();
        match submit(&current, |d| d.title.clone()) {
            Ok(title) => {
                log::info!("proposal '{}' submitted", title);
                errors.set(ValidationErrors::default());
                toast.success(
                    if is_edit { "Proposal updated" } else { "Proposal created" },
                    title,
                );
                ctx.replace_tab(&tab_key.get_value(), PROPOSALS);
            }
            Err(found) => {
                log::debug!("proposal form has {} invalid fields", found.len());
                if let Some(&first) = found.tabs_with_errors::<ProposalDraft>().first() {
                    active_tab.set(first);
                }
                errors.set(found);
            }
        }
    };

    let on_cancel = move |_| ctx.replace_tab(&tab_key.get_value(), PROPOSALS);

    let tab_button = move |tab: &'static str, label: &'static str| {
        view! {
            <button
                class="form-tabs__tab"
                class:form-tabs__tab--active=move || active_tab.get() == tab
                class:form-tabs__tab--invalid=move || tabs_with_errors.get().contains(&tab)
                on:click=move |_| active_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    let text = move |name: &'static str, label: &'static str, input_type: &'static str,
                     get: fn(&ProposalDraft) -> String, set: fn(&mut ProposalDraft, String)| {
        view! {
            <TextField
                label=label
                value=Signal::derive(move || draft.with(get))
                on_input=Callback::new(move |v: String| draft.update(|d| set(d, v)))
                error=field_error(errors, name)
                input_type=input_type
                required={name != "notes"}
            />
        }
    };

    move || match state.get() {
        FormState::Loading => view! { <div class="page__loading">"Loading..."</div> }.into_any(),
        FormState::Failed(e) => view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        }
        .into_any(),
        FormState::NotFound => view! {
            <ProposalNotFound id=record_id.get_value() tab_key=tab_key.get_value() />
        }
        .into_any(),
        FormState::Ready => view! {
            <div class="page">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">
                            {if is_edit { "Edit proposal" } else { "New proposal" }}
                        </h1>
                    </div>
                    <div class="header__actions">
                        <button class="button button--primary" on:click=on_submit>
                            {if is_edit { "Save" } else { "Create" }}
                        </button>
                        <button class="button button--secondary" on:click=on_cancel>
                            "Cancel"
                        </button>
                    </div>
                </div>

                <FormProgressBar progress=progress />

                <div class="form-tabs">
                    {tab_button(TAB_DETAILS, "Details")}
                    {tab_button(TAB_PRICING, "Pricing")}
                </div>

                <Show when=move || active_tab.get() == TAB_DETAILS>
                    <div class="form">
                        {text("title", "Title", "text", |d| d.title.clone(), |d, v| d.title = v)}
                        {text("customerName", "Customer name", "text", |d| d.customer_name.clone(), |d, v| d.customer_name = v)}
                        {text("contactEmail", "Contact email", "email", |d| d.contact_email.clone(), |d, v| d.contact_email = v)}
                        {text("notes", "Notes", "textarea", |d| d.notes.clone(), |d, v| d.notes = v)}
                    </div>
                </Show>

                <Show when=move || active_tab.get() == TAB_PRICING>
                    <div class="form">
                        <NumberField
                            label="Total value (₹)"
                            value=Signal::derive(move || draft.with(|d| d.total_value))
                            on_input=Callback::new(move |v: f64| draft.update(|d| d.total_value = v))
                            error=field_error(errors, "totalValue")
                            required=true
                        />
                        {text("validUntil", "Valid until", "date", |d| d.valid_until.clone(), |d, v| d.valid_until = v)}
                    </div>
                </Show>
            </div>
        }
        .into_any(),
    }
}
