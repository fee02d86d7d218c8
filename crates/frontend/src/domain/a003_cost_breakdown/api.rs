use crate::shared::api_utils::get_json;
use contracts::domain::a003_cost_breakdown::CostBreakdown;

pub const EXPORT_PATH: &str = "/api/a003/cost-breakdowns/export";

pub async fn fetch_cost_breakdowns() -> Result<Vec<CostBreakdown>, String> {
    get_json("/api/a003/cost-breakdowns").await
}
