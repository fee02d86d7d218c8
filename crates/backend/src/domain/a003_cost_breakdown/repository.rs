use contracts::domain::a003_cost_breakdown::{BudgetStatus, CostBreakdown};

use crate::shared::data::store::{get_store, seed_date};

pub fn list_all() -> &'static [CostBreakdown] {
    &get_store().cost_breakdowns
}

pub fn get_by_id(id: &str) -> Option<CostBreakdown> {
    list_all().iter().find(|c| c.id == id).cloned()
}

/// Статус считается от отклонения: ±2% от бюджета = в бюджете
fn status_for(budgeted: i64, actual: i64) -> BudgetStatus {
    let tolerance = budgeted / 50;
    if actual > budgeted + tolerance {
        BudgetStatus::OverBudget
    } else if actual < budgeted - tolerance {
        BudgetStatus::UnderBudget
    } else {
        BudgetStatus::OnBudget
    }
}

fn line(n: u32, project_id: &str, project: &str, category: &str, budgeted: i64, actual: i64, committed: i64) -> CostBreakdown {
    CostBreakdown {
        id: format!("cb-{:03}", n),
        project_id: project_id.to_string(),
        project_name: project.to_string(),
        category: category.to_string(),
        budgeted_cost: budgeted,
        actual_cost: actual,
        committed_cost: committed,
        status: status_for(budgeted, actual),
        last_updated: seed_date(2025, 10, n % 28 + 1),
    }
}

pub fn seed() -> Vec<CostBreakdown> {
    vec![
        line(1, "prj-001", "Lodha Tower Kitchens", "Materials", 12_500_000, 13_400_000, 800_000),
        line(2, "prj-001", "Lodha Tower Kitchens", "Labour", 4_200_000, 3_900_000, 300_000),
        line(3, "prj-001", "Lodha Tower Kitchens", "Logistics", 900_000, 910_000, 0),
        line(4, "prj-002", "Kapoor Bungalow Interiors", "Materials", 1_800_000, 1_650_000, 120_000),
        line(5, "prj-002", "Kapoor Bungalow Interiors", "Installation", 450_000, 520_000, 0),
        line(6, "prj-003", "Infotech Cafeteria", "Equipment", 2_600_000, 2_580_000, 200_000),
        line(7, "prj-003", "Infotech Cafeteria", "Labour", 700_000, 640_000, 50_000),
        line(8, "prj-004", "Green Valley Block C", "Materials", 6_000_000, 2_100_000, 3_000_000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(1_000_000, 1_019_000), BudgetStatus::OnBudget);
        assert_eq!(status_for(1_000_000, 1_021_000), BudgetStatus::OverBudget);
        assert_eq!(status_for(1_000_000, 900_000), BudgetStatus::UnderBudget);
    }
}
