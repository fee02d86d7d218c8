//! Sidebar - меню разделов, сгруппированное по функциональным областям

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys::{
    COST_BREAKDOWN, CONTRACT_EMPLOYEES, KANBAN_BOARD, PROJECTS, PROPOSALS, QUESTIONNAIRES,
};
use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<&'static str>, // tab keys
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "sales",
            label: "Sales & CRM",
            items: vec![PROPOSALS, QUESTIONNAIRES],
        },
        MenuGroup {
            id: "projects",
            label: "Projects",
            items: vec![PROJECTS, KANBAN_BOARD, COST_BREAKDOWN],
        },
        MenuGroup {
            id: "hr",
            label: "HR",
            items: vec![CONTRACT_EMPLOYEES],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                collapsed_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || !collapsed_groups.get().contains(&group_id)
                            >
                                "›"
                            </div>
                        </div>

                        <Show when=move || !collapsed_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&key| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.navigate(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                <span>{tab_label_for_key(key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::TabRoute;

    #[test]
    fn test_every_menu_item_has_a_page() {
        for group in get_menu_groups() {
            for key in group.items {
                assert!(TabRoute::parse(key).is_some(), "no page for {}", key);
            }
        }
    }
}
