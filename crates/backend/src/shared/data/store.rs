//! In-memory record sets, seeded once per process

use contracts::domain::a001_proposal::Proposal;
use contracts::domain::a002_questionnaire::Questionnaire;
use contracts::domain::a003_cost_breakdown::CostBreakdown;
use contracts::domain::a004_kanban_card::KanbanCard;
use contracts::domain::a005_contract_employee::ContractEmployee;
use once_cell::sync::Lazy;

use crate::domain::a006_project::service::{InMemoryProjectService, ProjectManagementService};
use crate::domain::{
    a001_proposal, a002_questionnaire, a003_cost_breakdown, a004_kanban_card,
    a005_contract_employee, a006_project,
};

/// Записи неизменяемы; изменяемые спецификации створок живут в сервисе проектов
pub struct DataStore {
    pub proposals: Vec<Proposal>,
    pub questionnaires: Vec<Questionnaire>,
    pub cost_breakdowns: Vec<CostBreakdown>,
    pub kanban_cards: Vec<KanbanCard>,
    pub contract_employees: Vec<ContractEmployee>,
    pub projects: InMemoryProjectService,
}

impl DataStore {
    fn seeded() -> Self {
        Self {
            proposals: a001_proposal::repository::seed(),
            questionnaires: a002_questionnaire::repository::seed(),
            cost_breakdowns: a003_cost_breakdown::repository::seed(),
            kanban_cards: a004_kanban_card::repository::seed(),
            contract_employees: a005_contract_employee::repository::seed(),
            projects: InMemoryProjectService::new(
                a006_project::repository::seed_projects(),
                a006_project::repository::seed_shutter_specs(),
            ),
        }
    }
}

static STORE: Lazy<DataStore> = Lazy::new(DataStore::seeded);

pub fn get_store() -> &'static DataStore {
    &STORE
}

pub fn project_service() -> &'static dyn ProjectManagementService {
    &get_store().projects
}

/// Seed eagerly at start-up so the first request doesn't pay for it
pub fn initialize_store() {
    let store = get_store();
    tracing::info!(
        "Data store seeded: {} proposals, {} questionnaires, {} cost lines, {} cards, {} contract employees, {} projects",
        store.proposals.len(),
        store.questionnaires.len(),
        store.cost_breakdowns.len(),
        store.kanban_cards.len(),
        store.contract_employees.len(),
        store.projects.project_count(),
    );
}

/// Date literal for seed data; an impossible date is a typo in the seed tables
pub fn seed_date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid seed date {:04}-{:02}-{:02}", year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_date() {
        assert_eq!(seed_date(2025, 4, 1).to_string(), "2025-04-01");
    }

    #[test]
    #[should_panic(expected = "invalid seed date 2025-02-30")]
    fn test_seed_date_rejects_impossible_date() {
        seed_date(2025, 2, 30);
    }
}
