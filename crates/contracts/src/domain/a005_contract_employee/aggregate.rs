use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::BadgeVariant;
use crate::shared::list_view::{aggregate, Aggregator, ListRecord, ListViewError, SortSpec};
use crate::wire_enum;

// ============================================================================
// Enums
// ============================================================================
wire_enum! {
    pub enum EmploymentStatus ("employment status") {
        Active => "active", "Active";
        Pending => "pending", "Pending";
        Completed => "completed", "Completed";
        Terminated => "terminated", "Terminated";
    }
}

impl EmploymentStatus {
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Success,
            Self::Pending => BadgeVariant::Warning,
            Self::Completed => BadgeVariant::Primary,
            Self::Terminated => BadgeVariant::Error,
        }
    }
}

wire_enum! {
    pub enum ContractType ("contract type") {
        FixedTerm => "fixed-term", "Fixed term";
        ProjectBased => "project-based", "Project based";
        Hourly => "hourly", "Hourly";
    }
}

wire_enum! {
    pub enum ContractEmployeeFacet [ListViewError::UnknownFacet] {
        Department => "department", "Department";
        Status => "status", "Status";
        ContractType => "contract_type", "Contract type";
    }
}

wire_enum! {
    pub enum ContractEmployeeSortKey [ListViewError::UnknownSortKey] {
        StartDate => "start_date", "Start date";
        Name => "name", "Name";
        DailyRate => "daily_rate", "Daily rate";
    }
}

// ============================================================================
// Record
// ============================================================================
/// Сотрудник подрядной организации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEmployee {
    pub id: String,
    pub employee_code: String,
    pub name: String,
    pub department: String,
    pub designation: String,
    pub contractor_agency: String,
    pub contract_type: ContractType,
    pub status: EmploymentStatus,
    /// Ставка за день в рупиях
    pub daily_rate: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: String,
}

impl ContractEmployee {
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }
}

impl ListRecord for ContractEmployee {
    type Facet = ContractEmployeeFacet;
    type SortKey = ContractEmployeeSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.employee_code.as_str(),
            self.contractor_agency.as_str(),
        ]
    }

    fn facet_value(&self, facet: ContractEmployeeFacet) -> &str {
        match facet {
            ContractEmployeeFacet::Department => self.department.as_str(),
            ContractEmployeeFacet::Status => self.status.as_str(),
            ContractEmployeeFacet::ContractType => self.contract_type.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: ContractEmployeeSortKey) -> Ordering {
        match key {
            ContractEmployeeSortKey::StartDate => self.start_date.cmp(&other.start_date),
            ContractEmployeeSortKey::Name => self.name.cmp(&other.name),
            ContractEmployeeSortKey::DailyRate => self.daily_rate.cmp(&other.daily_rate),
        }
    }

    fn default_sort() -> Option<SortSpec<ContractEmployeeSortKey>> {
        Some(SortSpec::desc(ContractEmployeeSortKey::StartDate))
    }
}

// ============================================================================
// Stats
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEmployeeStats {
    pub total: usize,
    pub active: usize,
    pub avg_daily_rate: Option<f64>,
    /// Дневной фонд оплаты активных сотрудников
    pub active_daily_cost: f64,
}

impl ContractEmployeeStats {
    pub fn compute(subset: &[ContractEmployee]) -> Self {
        let active_daily_cost = aggregate(
            subset,
            &Aggregator::Sum(|e: &ContractEmployee| {
                if e.is_active() {
                    e.daily_rate as f64
                } else {
                    0.0
                }
            }),
        );

        Self {
            total: aggregate(subset, &Aggregator::Count).as_count(),
            active: aggregate(subset, &Aggregator::CountWhere(ContractEmployee::is_active)).as_count(),
            avg_daily_rate: aggregate(subset, &Aggregator::Mean(|e: &ContractEmployee| e.daily_rate as f64))
                .as_f64(),
            active_daily_cost: active_daily_cost.as_f64().unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewModel;

    fn employee(
        code: &str,
        name: &str,
        department: &str,
        status: EmploymentStatus,
        contract_type: ContractType,
        rate: i64,
        start: (i32, u32, u32),
    ) -> ContractEmployee {
        ContractEmployee {
            id: code.to_lowercase(),
            employee_code: code.into(),
            name: name.into(),
            department: department.into(),
            designation: "Technician".into(),
            contractor_agency: "Skyline Manpower".into(),
            contract_type,
            status,
            daily_rate: rate,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: None,
            location: "Pune".into(),
        }
    }

    fn sample() -> Vec<ContractEmployee> {
        use ContractType::*;
        use EmploymentStatus::*;
        vec![
            employee("CE-001", "Ravi Kumar", "Production", Active, FixedTerm, 1200, (2025, 1, 10)),
            employee("CE-002", "Sunita Patil", "Installation", Active, ProjectBased, 1500, (2025, 3, 1)),
            employee("CE-003", "Imran Shaikh", "Production", Pending, Hourly, 900, (2025, 6, 15)),
            employee("CE-004", "Anita Desai", "Quality", Completed, FixedTerm, 1400, (2024, 8, 1)),
        ]
    }

    #[test]
    fn test_default_sort_newest_start_first() {
        let model = ListViewModel::new(sample());
        let codes: Vec<String> = model.filtered().into_iter().map(|e| e.employee_code).collect();
        assert_eq!(codes, vec!["CE-003", "CE-002", "CE-001", "CE-004"]);
    }

    #[test]
    fn test_three_facets() {
        let mut model = ListViewModel::new(sample());
        model.set_facet(ContractEmployeeFacet::Department, "Production");
        assert_eq!(model.filtered().len(), 2);

        model.set_facet(ContractEmployeeFacet::ContractType, "hourly");
        assert_eq!(model.filtered()[0].name, "Imran Shaikh");

        model.set_facet(ContractEmployeeFacet::Status, "active");
        assert!(model.filtered().is_empty());
    }

    #[test]
    fn test_search_by_agency() {
        let mut model = ListViewModel::new(sample());
        model.set_query("skyline");
        assert_eq!(model.filtered().len(), 4);
    }

    #[test]
    fn test_stats() {
        let stats = ContractEmployeeStats::compute(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.avg_daily_rate, Some(1250.0));
        assert_eq!(stats.active_daily_cost, 2700.0);
    }
}
