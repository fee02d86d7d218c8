use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::modal_service::ModalService;
use crate::layout::center::tabs::Tabs;
use crate::layout::toast::{ToastHost, ToastService};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toasts and the single create/edit modal are app-wide services
    provide_context(ToastService::new());
    provide_context(ModalService::new());

    view! { <MainLayout /> }
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // `?active=<tab key>` restores the tab after a reload
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
        <ToastHost />
    }
}
