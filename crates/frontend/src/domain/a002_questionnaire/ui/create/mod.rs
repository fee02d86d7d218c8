use crate::layout::modal_service::ModalService;
use crate::layout::toast::use_toast;
use crate::shared::components::form_field::field_error;
use crate::shared::components::{FieldError, FormProgressBar, NumberField, TextField};
use contracts::domain::a002_questionnaire::{QuestionnaireCategory, QuestionnaireDraft};
use contracts::shared::metadata::{submit, FormProgress, ValidationErrors};
use leptos::prelude::*;

pub const CREATE_MODAL_ID: &str = "a002_questionnaire_create";

/// Форма новой анкеты в модальном окне.
///
/// Анкета нигде не сохраняется: после успешной проверки показывается
/// уведомление, окно закрывается, черновик очищается.
#[component]
pub fn QuestionnaireCreateForm() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let toast = use_toast();

    let draft = RwSignal::new(QuestionnaireDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let progress = Signal::derive(move || draft.with(FormProgress::of));

    let close = move || {
        draft.set(QuestionnaireDraft::default());
        errors.set(ValidationErrors::default());
        modal.hide();
    };

    let on_submit = move |_| {
        let current = draft.get_untracked();
        // Пустая категория ловится правилом required, неизвестная здесь
        let category = current.category.parse::<QuestionnaireCategory>();
        match submit(&current, |d| d.name.trim().to_string()) {
            Ok(name) if category.is_ok() => {
                log::info!("questionnaire '{}' created", name);
                toast.success("Questionnaire created", name);
                close();
            }
            Ok(_) => {
                errors.update(|e| e.insert("category", "Unknown category".to_string()));
            }
            Err(found) => errors.set(found),
        }
    };

    view! {
        <div class="form">
            <FormProgressBar progress=progress />
            <TextField
                label="Name"
                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                on_input=Callback::new(move |v: String| draft.update(|d| d.name = v))
                error=field_error(errors, "name")
                required=true
            />
            <div class="form__group">
                <label class="form__label">"Category *"</label>
                <select
                    class="form__select"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.category = value);
                    }
                >
                    <option value="">"Select a category"</option>
                    {QuestionnaireCategory::all().iter().map(|c| view! {
                        <option value=c.as_str()>{c.display_name()}</option>
                    }).collect_view()}
                </select>
                <FieldError error=field_error(errors, "category") />
            </div>
            <TextField
                label="Target segment"
                value=Signal::derive(move || draft.with(|d| d.target_segment.clone()))
                on_input=Callback::new(move |v: String| draft.update(|d| d.target_segment = v))
                error=field_error(errors, "targetSegment")
                required=true
            />
            <TextField
                label="Description"
                value=Signal::derive(move || draft.with(|d| d.description.clone()))
                on_input=Callback::new(move |v: String| draft.update(|d| d.description = v))
                error=field_error(errors, "description")
                input_type="textarea"
            />
            <NumberField
                label="Avg completion time (min)"
                value=Signal::derive(move || draft.with(|d| d.avg_completion_time))
                on_input=Callback::new(move |v: f64| draft.update(|d| d.avg_completion_time = v))
                error=field_error(errors, "avgCompletionTime")
                required=true
            />
            <div class="form__actions">
                <button class="button button--primary" on:click=on_submit>"Create"</button>
                <button class="button button--secondary" on:click=move |_| close()>"Cancel"</button>
            </div>
        </div>
    }
}
