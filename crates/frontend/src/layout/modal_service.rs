use leptos::prelude::*;

/// Сервис модальных окон: в каждый момент открыто не больше одного окна.
#[derive(Clone, Copy)]
pub struct ModalService {
    open_id: RwSignal<Option<&'static str>>,
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            open_id: RwSignal::new(None),
        }
    }

    /// Показать окно `id`, закрыв предыдущее
    pub fn show(&self, id: &'static str) {
        self.open_id.set(Some(id));
    }

    pub fn hide(&self) {
        self.open_id.set(None);
    }

    pub fn is_open(&self, id: &'static str) -> bool {
        self.open_id.get() == Some(id)
    }
}

/// Модальное окно.
///
/// ```rust,ignore
/// let modal = use_context::<ModalService>().expect("ModalService not provided in context");
/// modal.show("questionnaire-create");
///
/// view! {
///     <Modal id="questionnaire-create" title="New questionnaire">
///         <QuestionnaireCreateForm />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(id: &'static str, #[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let title = StoredValue::new(title);

    view! {
        <Show when=move || modal.is_open(id)>
            <div class="modal-overlay" on:click=move |_| modal.hide()>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.get_value()}</h2>
                        <button class="modal-close" on:click=move |_| modal.hide()>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
