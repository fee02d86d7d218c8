//! Ключи табов.
//!
//! Ключ таба одновременно служит адресом страницы (`?active=<key>`), поэтому
//! формат фиксирован: `<aggregate>` для списков и `<aggregate>_<action>_<id>`
//! для карточек.

pub const PROPOSALS: &str = "a001_proposal";
pub const PROPOSAL_NEW: &str = "a001_proposal_new";
const PROPOSAL_VIEW_PREFIX: &str = "a001_proposal_view_";
const PROPOSAL_EDIT_PREFIX: &str = "a001_proposal_edit_";
pub const QUESTIONNAIRES: &str = "a002_questionnaire";
pub const COST_BREAKDOWN: &str = "a003_cost_breakdown";
pub const KANBAN_BOARD: &str = "a004_kanban_board";
pub const CONTRACT_EMPLOYEES: &str = "a005_contract_employee";
pub const PROJECTS: &str = "a006_project";
const SHUTTER_SPECS_PREFIX: &str = "a006_shutter_specs_";

/// Page addressed by a tab key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRoute {
    Proposals,
    ProposalNew,
    ProposalView(String),
    ProposalEdit(String),
    Questionnaires,
    CostBreakdown,
    KanbanBoard,
    ContractEmployees,
    Projects,
    ShutterSpecs(String),
}

fn id_after<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix).filter(|id| !id.is_empty())
}

impl TabRoute {
    /// `None` for keys no page is registered for
    pub fn parse(key: &str) -> Option<Self> {
        let route = match key {
            PROPOSALS => Self::Proposals,
            PROPOSAL_NEW => Self::ProposalNew,
            QUESTIONNAIRES => Self::Questionnaires,
            COST_BREAKDOWN => Self::CostBreakdown,
            KANBAN_BOARD => Self::KanbanBoard,
            CONTRACT_EMPLOYEES => Self::ContractEmployees,
            PROJECTS => Self::Projects,
            k => {
                if let Some(id) = id_after(k, PROPOSAL_VIEW_PREFIX) {
                    Self::ProposalView(id.to_string())
                } else if let Some(id) = id_after(k, PROPOSAL_EDIT_PREFIX) {
                    Self::ProposalEdit(id.to_string())
                } else if let Some(id) = id_after(k, SHUTTER_SPECS_PREFIX) {
                    Self::ShutterSpecs(id.to_string())
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }

    /// Id of the record a detail tab is opened for
    pub fn detail_id(&self) -> Option<&str> {
        match self {
            Self::ProposalView(id) | Self::ProposalEdit(id) | Self::ShutterSpecs(id) => {
                Some(id.as_str())
            }
            _ => None,
        }
    }

    pub fn key(&self) -> String {
        match self {
            Self::Proposals => PROPOSALS.to_string(),
            Self::ProposalNew => PROPOSAL_NEW.to_string(),
            Self::ProposalView(id) => format!("{}{}", PROPOSAL_VIEW_PREFIX, id),
            Self::ProposalEdit(id) => format!("{}{}", PROPOSAL_EDIT_PREFIX, id),
            Self::Questionnaires => QUESTIONNAIRES.to_string(),
            Self::CostBreakdown => COST_BREAKDOWN.to_string(),
            Self::KanbanBoard => KANBAN_BOARD.to_string(),
            Self::ContractEmployees => CONTRACT_EMPLOYEES.to_string(),
            Self::Projects => PROJECTS.to_string(),
            Self::ShutterSpecs(id) => format!("{}{}", SHUTTER_SPECS_PREFIX, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_keys() {
        assert_eq!(TabRoute::parse("a001_proposal"), Some(TabRoute::Proposals));
        assert_eq!(TabRoute::parse("a001_proposal_new"), Some(TabRoute::ProposalNew));
        assert_eq!(TabRoute::parse("a004_kanban_board"), Some(TabRoute::KanbanBoard));
        assert_eq!(TabRoute::parse("a006_project"), Some(TabRoute::Projects));
    }

    #[test]
    fn test_parse_detail_keys() {
        assert_eq!(
            TabRoute::parse("a001_proposal_view_prop-003"),
            Some(TabRoute::ProposalView("prop-003".into()))
        );
        assert_eq!(
            TabRoute::parse("a001_proposal_edit_prop-003"),
            Some(TabRoute::ProposalEdit("prop-003".into()))
        );
        assert_eq!(
            TabRoute::parse("a006_shutter_specs_prj-002"),
            Some(TabRoute::ShutterSpecs("prj-002".into()))
        );
        assert_eq!(
            TabRoute::parse("a006_shutter_specs_prj-002")
                .as_ref()
                .and_then(TabRoute::detail_id),
            Some("prj-002")
        );
        assert_eq!(TabRoute::Projects.detail_id(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty_ids() {
        assert_eq!(TabRoute::parse("a001_proposal_view_"), None);
        assert_eq!(TabRoute::parse("a099_unknown"), None);
        assert_eq!(TabRoute::parse(""), None);
    }

    #[test]
    fn test_key_matches_parse() {
        for route in [
            TabRoute::Proposals,
            TabRoute::ProposalNew,
            TabRoute::ProposalEdit("prop-001".into()),
            TabRoute::ShutterSpecs("prj-001".into()),
        ] {
            assert_eq!(TabRoute::parse(&route.key()), Some(route));
        }
    }
}
