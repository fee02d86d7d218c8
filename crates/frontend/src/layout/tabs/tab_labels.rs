//! Tab labels - единственный источник правды для заголовков табов.

use super::keys::TabRoute;

/// Заголовок списочного таба
pub fn list_label(route: &TabRoute) -> &'static str {
    match route {
        TabRoute::Proposals => "Proposals",
        TabRoute::ProposalNew => "New proposal",
        TabRoute::ProposalView(_) => "Proposal",
        TabRoute::ProposalEdit(_) => "Edit proposal",
        TabRoute::Questionnaires => "Questionnaires",
        TabRoute::CostBreakdown => "Cost breakdown",
        TabRoute::KanbanBoard => "Task board",
        TabRoute::ContractEmployees => "Contract employees",
        TabRoute::Projects => "Projects",
        TabRoute::ShutterSpecs(_) => "Shutter specs",
    }
}

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Для карточек к заголовку добавляется идентификатор. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    match TabRoute::parse(key) {
        Some(route) => match route.detail_id() {
            Some(id) => detail_tab_label(list_label(&route), id),
            None => list_label(&route).to_string(),
        },
        None => key.to_string(),
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
