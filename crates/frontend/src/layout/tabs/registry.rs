//! Tab Registry - единственное место сопоставления ключа таба и страницы.

use super::keys::TabRoute;
use crate::domain::a001_proposal::ui::details::{ProposalForm, ProposalView};
use crate::domain::a001_proposal::ui::list::ProposalList;
use crate::domain::a002_questionnaire::ui::list::QuestionnaireList;
use crate::domain::a003_cost_breakdown::ui::list::CostBreakdownList;
use crate::domain::a004_kanban_card::ui::board::KanbanBoardPage;
use crate::domain::a005_contract_employee::ui::list::ContractEmployeeList;
use crate::domain::a006_project::ui::list::ProjectList;
use crate::domain::a006_project::ui::shutter_specs::ShutterSpecsPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по ключу.
///
/// Detail-страницы получают собственный ключ, чтобы закрыть себя после
/// сохранения или отмены.
pub fn render_tab_content(key: &str) -> AnyView {
    let tab_key = key.to_string();

    match TabRoute::parse(key) {
        Some(TabRoute::Proposals) => view! { <ProposalList /> }.into_any(),
        Some(TabRoute::ProposalNew) => {
            view! { <ProposalForm id=None tab_key=tab_key /> }.into_any()
        }
        Some(TabRoute::ProposalView(id)) => {
            view! { <ProposalView id=id tab_key=tab_key /> }.into_any()
        }
        Some(TabRoute::ProposalEdit(id)) => {
            view! { <ProposalForm id=Some(id) tab_key=tab_key /> }.into_any()
        }
        Some(TabRoute::Questionnaires) => view! { <QuestionnaireList /> }.into_any(),
        Some(TabRoute::CostBreakdown) => view! { <CostBreakdownList /> }.into_any(),
        Some(TabRoute::KanbanBoard) => view! { <KanbanBoardPage /> }.into_any(),
        Some(TabRoute::ContractEmployees) => view! { <ContractEmployeeList /> }.into_any(),
        Some(TabRoute::Projects) => view! { <ProjectList /> }.into_any(),
        Some(TabRoute::ShutterSpecs(project_id)) => {
            view! { <ShutterSpecsPage project_id=project_id tab_key=tab_key /> }.into_any()
        }
        None => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
