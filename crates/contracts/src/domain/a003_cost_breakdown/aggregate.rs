use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::BadgeVariant;
use crate::shared::list_view::{aggregate, Aggregator, ListRecord, ListViewError, SortSpec};
use crate::wire_enum;

wire_enum! {
    pub enum BudgetStatus ("budget status") {
        UnderBudget => "under-budget", "Under budget";
        OnBudget => "on-budget", "On budget";
        OverBudget => "over-budget", "Over budget";
    }
}

impl BudgetStatus {
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::UnderBudget => BadgeVariant::Success,
            Self::OnBudget => BadgeVariant::Primary,
            Self::OverBudget => BadgeVariant::Error,
        }
    }
}

wire_enum! {
    pub enum CostBreakdownFacet [ListViewError::UnknownFacet] {
        Status => "status", "Status";
        Project => "project", "Project";
    }
}

wire_enum! {
    pub enum CostBreakdownSortKey [ListViewError::UnknownSortKey] {
        ActualCost => "actual", "Actual";
        BudgetedCost => "budgeted", "Budgeted";
        Variance => "variance", "Variance";
        ProjectName => "project", "Project";
    }
}

/// Статья затрат проекта: бюджет против факта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub category: String,
    pub budgeted_cost: i64,
    pub actual_cost: i64,
    pub committed_cost: i64,
    pub status: BudgetStatus,
    pub last_updated: NaiveDate,
}

impl CostBreakdown {
    /// Положительное значение = перерасход
    pub fn variance(&self) -> i64 {
        self.actual_cost - self.budgeted_cost
    }

    /// Variance relative to budget; `None` for a zero budget
    pub fn variance_percent(&self) -> Option<f64> {
        if self.budgeted_cost == 0 {
            None
        } else {
            Some(self.variance() as f64 * 100.0 / self.budgeted_cost as f64)
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.status == BudgetStatus::OverBudget
    }
}

impl ListRecord for CostBreakdown {
    type Facet = CostBreakdownFacet;
    type SortKey = CostBreakdownSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.project_name.as_str(), self.category.as_str()]
    }

    fn facet_value(&self, facet: CostBreakdownFacet) -> &str {
        match facet {
            CostBreakdownFacet::Status => self.status.as_str(),
            CostBreakdownFacet::Project => self.project_name.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: CostBreakdownSortKey) -> Ordering {
        match key {
            CostBreakdownSortKey::ActualCost => self.actual_cost.cmp(&other.actual_cost),
            CostBreakdownSortKey::BudgetedCost => self.budgeted_cost.cmp(&other.budgeted_cost),
            CostBreakdownSortKey::Variance => self.variance().cmp(&other.variance()),
            CostBreakdownSortKey::ProjectName => self.project_name.cmp(&other.project_name),
        }
    }

    fn default_sort() -> Option<SortSpec<CostBreakdownSortKey>> {
        Some(SortSpec::desc(CostBreakdownSortKey::ActualCost))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdownStats {
    pub total_budgeted: f64,
    pub total_actual: f64,
    /// actual - budgeted
    pub variance: f64,
    pub over_budget: usize,
}

impl CostBreakdownStats {
    pub fn compute(subset: &[CostBreakdown]) -> Self {
        let total_budgeted = aggregate(
            subset,
            &Aggregator::Sum(|c: &CostBreakdown| c.budgeted_cost as f64),
        )
        .as_f64()
        .unwrap_or(0.0);
        let total_actual = aggregate(subset, &Aggregator::Sum(|c: &CostBreakdown| c.actual_cost as f64))
            .as_f64()
            .unwrap_or(0.0);

        Self {
            total_budgeted,
            total_actual,
            variance: total_actual - total_budgeted,
            over_budget: aggregate(subset, &Aggregator::CountWhere(CostBreakdown::is_over_budget))
                .as_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewModel;

    fn line(id: &str, project: &str, category: &str, budgeted: i64, actual: i64, status: BudgetStatus) -> CostBreakdown {
        CostBreakdown {
            id: id.into(),
            project_id: project.to_lowercase().replace(' ', "-"),
            project_name: project.into(),
            category: category.into(),
            budgeted_cost: budgeted,
            actual_cost: actual,
            committed_cost: 0,
            status,
            last_updated: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
        }
    }

    fn sample() -> Vec<CostBreakdown> {
        vec![
            line("CB-1", "Villa Interiors", "Materials", 500_000, 560_000, BudgetStatus::OverBudget),
            line("CB-2", "Villa Interiors", "Labour", 200_000, 180_000, BudgetStatus::UnderBudget),
            line("CB-3", "Office Fit-out", "Materials", 300_000, 300_000, BudgetStatus::OnBudget),
        ]
    }

    #[test]
    fn test_default_sort_by_actual_desc() {
        let model = ListViewModel::new(sample());
        let ids: Vec<String> = model.filtered().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["CB-1", "CB-3", "CB-2"]);
    }

    #[test]
    fn test_project_facet_and_stats() {
        let mut model = ListViewModel::new(sample());
        model.set_facet(CostBreakdownFacet::Project, "Villa Interiors");
        let subset = model.filtered();
        let stats = CostBreakdownStats::compute(&subset);

        assert_eq!(stats.total_budgeted, 700_000.0);
        assert_eq!(stats.total_actual, 740_000.0);
        assert_eq!(stats.variance, 40_000.0);
        assert_eq!(stats.over_budget, 1);
    }

    #[test]
    fn test_variance_percent() {
        let items = sample();
        assert_eq!(items[0].variance(), 60_000);
        assert_eq!(items[0].variance_percent(), Some(12.0));
        let zero = line("CB-9", "X", "Misc", 0, 10, BudgetStatus::OverBudget);
        assert_eq!(zero.variance_percent(), None);
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!("over-budget".parse::<BudgetStatus>(), Ok(BudgetStatus::OverBudget));
        assert!("over_budget".parse::<BudgetStatus>().is_err());
    }
}
