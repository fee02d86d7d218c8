//! Редактор спецификации створок проекта.
//!
//! Любой сбой сервиса (включая 404) показывается одним toast-ом, после чего
//! вкладка закрывается и открывается список проектов. Повторов нет.

use crate::domain::a006_project::api::{fetch_shutter_specs, put_shutter_specs};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys::PROJECTS;
use crate::layout::toast::use_toast;
use crate::shared::components::form_field::field_error;
use crate::shared::components::{FormProgressBar, NumberField, TextField};
use contracts::domain::a006_project::{ShutterSpecs, ShutterSpecsDraft};
use contracts::shared::format::format_date;
use contracts::shared::metadata::{submit, FormProgress, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TAB_SPECS: &str = "specs";
const TAB_DIMENSIONS: &str = "dimensions";

fn area_label(specs: &ShutterSpecs) -> String {
    format!("{:.2} m²", specs.total_area_sq_m())
}

#[component]
#[allow(non_snake_case)]
pub fn ShutterSpecsPage(project_id: String, tab_key: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toast = use_toast();

    let saved = RwSignal::new(None::<ShutterSpecs>);
    let draft = RwSignal::new(ShutterSpecsDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let active_tab = RwSignal::new(TAB_SPECS);
    let saving = RwSignal::new(false);

    let project_id = StoredValue::new(project_id);
    let tab_key = StoredValue::new(tab_key);

    let fall_back = move |title: &'static str, e: String| {
        log::error!("shutter specs of {}: {}", project_id.get_value(), e);
        toast.error(title, e);
        ctx.replace_tab(&tab_key.get_value(), PROJECTS);
    };

    spawn_local(async move {
        match fetch_shutter_specs(&project_id.get_value()).await {
            Ok(specs) => {
                draft.set(ShutterSpecsDraft::from_specs(&specs));
                saved.set(Some(specs));
            }
            Err(e) => fall_back("Failed to load shutter specs", e),
        }
    });

    let progress = Signal::derive(move || draft.with(FormProgress::of));
    let tabs_with_errors = Memo::new(move |_| errors.with(|e| e.tabs_with_errors::<ShutterSpecsDraft>()));
    let area = Signal::derive(move || draft.with(|d| area_label(&d.to_specs(&project_id.get_value()))));

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        match submit(&draft.get_untracked(), ShutterSpecsDraft::clone) {
            Ok(valid) => {
                errors.set(ValidationErrors::default());
                saving.set(true);
                spawn_local(async move {
                    match put_shutter_specs(&project_id.get_value(), &valid).await {
                        Ok(specs) => {
                            log::info!("shutter specs of {} saved", specs.project_id);
                            toast.success("Shutter specs saved", area_label(&specs));
                            draft.set(ShutterSpecsDraft::from_specs(&specs));
                            saved.set(Some(specs));
                        }
                        Err(e) => fall_back("Failed to save shutter specs", e),
                    }
                    saving.set(false);
                });
            }
            Err(found) => {
                if let Some(&first) = found.tabs_with_errors::<ShutterSpecsDraft>().first() {
                    active_tab.set(first);
                }
                errors.set(found);
            }
        }
    };

    let on_reset = move |_| {
        if let Some(specs) = saved.get_untracked() {
            draft.set(ShutterSpecsDraft::from_specs(&specs));
            errors.set(ValidationErrors::default());
        }
    };

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

    let text = move |name: &'static str, label: &'static str, required: bool,
                     get: fn(&ShutterSpecsDraft) -> String, set: fn(&mut ShutterSpecsDraft, String)| {
        view! {
            <TextField
                label=label
                value=Signal::derive(move || draft.with(get))
                on_input=Callback::new(move |v: String| draft.update(|d| set(d, v)))
                error=field_error(errors, name)
                input_type=if name == "notes" { "textarea" } else { "text" }
                required=required
            />
        }
    };

    let number = move |name: &'static str, label: &'static str,
                       get: fn(&ShutterSpecsDraft) -> f64, set: fn(&mut ShutterSpecsDraft, f64)| {
        view! {
            <NumberField
                label=label
                value=Signal::derive(move || draft.with(get))
                on_input=Callback::new(move |v: f64| draft.update(|d| set(d, v)))
                error=field_error(errors, name)
                required=true
            />
        }
    };

    move || match saved.get() {
        None => view! { <div class="page__loading">"Loading..."</div> }.into_any(),
        Some(specs) => view! {
            <div class="page">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">"Shutter specs"</h1>
                        <div class="header__subtitle">
                            {format!("Project {}", specs.project_id)}
                            {specs.updated_at.map(|d| format!(" · updated {}", format_date(d)))}
                        </div>
                    </div>
                    <div class="header__actions">
                        <button
                            class="button button--primary"
                            disabled=move || saving.get()
                            on:click=on_save
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button class="button button--secondary" on:click=on_reset>
                            "Reset"
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| ctx.replace_tab(&tab_key.get_value(), PROJECTS)
                        >
                            "Back to projects"
                        </button>
                    </div>
                </div>

                <FormProgressBar progress=progress />

                <div class="form-tabs">
                    {tab_button(TAB_SPECS, "Specs")}
                    {tab_button(TAB_DIMENSIONS, "Dimensions")}
                </div>

                <Show when=move || active_tab.get() == TAB_SPECS>
                    <div class="form">
                        {text("shutterType", "Shutter type", true, |d| d.shutter_type.clone(), |d, v| d.shutter_type = v)}
                        {text("material", "Material", true, |d| d.material.clone(), |d, v| d.material = v)}
                        {text("finish", "Finish", false, |d| d.finish.clone(), |d, v| d.finish = v)}
                        {text("notes", "Notes", false, |d| d.notes.clone(), |d, v| d.notes = v)}
                    </div>
                </Show>

                <Show when=move || active_tab.get() == TAB_DIMENSIONS>
                    <div class="form">
                        {number("widthMm", "Width (mm)", |d| d.width_mm, |d, v| d.width_mm = v)}
                        {number("heightMm", "Height (mm)", |d| d.height_mm, |d, v| d.height_mm = v)}
                        {number("quantity", "Quantity", |d| d.quantity, |d, v| d.quantity = v)}
                        <div class="form__summary">
                            <span class="form__label">"Total area"</span>
                            <span class="form__value">{area}</span>
                        </div>
                    </div>
                </Show>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::FormDraft;

    #[test]
    fn test_form_tabs_cover_every_field() {
        for field in ShutterSpecsDraft::field_metadata() {
            assert!(
                field.tab == TAB_SPECS || field.tab == TAB_DIMENSIONS,
                "{} is on unknown tab {}",
                field.name,
                field.tab
            );
        }
    }

    #[test]
    fn test_area_label() {
        let specs = ShutterSpecs {
            project_id: "prj-001".into(),
            shutter_type: "Handleless".into(),
            material: "BWP Plywood".into(),
            finish: "Acrylic".into(),
            width_mm: 600,
            height_mm: 720,
            quantity: 10,
            notes: String::new(),
            updated_at: None,
        };
        assert_eq!(area_label(&specs), "4.32 m²");
    }
}
