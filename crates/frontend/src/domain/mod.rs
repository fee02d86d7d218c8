pub mod a001_proposal;
pub mod a002_questionnaire;
pub mod a003_cost_breakdown;
pub mod a004_kanban_card;
pub mod a005_contract_employee;
pub mod a006_project;
