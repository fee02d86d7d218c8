//! Поля форм создания/редактирования с inline-ошибками

use contracts::shared::metadata::{FormProgress, ValidationErrors};
use leptos::prelude::*;

/// Ошибка поля `name` из общего набора ошибок формы
pub fn field_error(errors: RwSignal<ValidationErrors>, name: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)))
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <div class="form__error">{message}</div> })
}

/// Текстовое поле; `input_type` = "text" (default), "email", "date", "textarea"
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };

    let control = if input_type == "textarea" {
        view! {
            <textarea
                class="form__textarea"
                class:form__input--invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            {control}
            <FieldError error=error />
        </div>
    }
}

/// Числовое поле; пустой или нечисловой ввод считается нулём
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    on_input: Callback<f64>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let display = move || {
        let v = value.get();
        if v == 0.0 {
            String::new()
        } else {
            v.to_string()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                type="number"
                prop:value=display
                on:input=move |ev| on_input.run(parse_number_input(&event_target_value(&ev)))
            />
            <FieldError error=error />
        </div>
    }
}

pub fn parse_number_input(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(0.0)
}

/// Индикатор заполненности обязательных полей
#[component]
pub fn FormProgressBar(#[prop(into)] progress: Signal<FormProgress>) -> impl IntoView {
    view! {
        <div class="form-progress">
            <div class="form-progress__label">
                {move || {
                    let p = progress.get();
                    format!("{} of {} required fields", p.completed, p.total)
                }}
            </div>
            <div class="form-progress__track">
                <div
                    class="form-progress__bar"
                    class:form-progress__bar--complete=move || progress.get().is_complete()
                    style:width=move || format!("{:.0}%", progress.get().percentage())
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_input() {
        assert_eq!(parse_number_input("1250"), 1250.0);
        assert_eq!(parse_number_input(" 12,5 "), 12.5);
        assert_eq!(parse_number_input(""), 0.0);
        assert_eq!(parse_number_input("abc"), 0.0);
    }
}
