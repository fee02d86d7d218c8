use crate::shared::api_utils::get_json;
use contracts::domain::a005_contract_employee::ContractEmployee;

pub const EXPORT_PATH: &str = "/api/a005/contract-employees/export";

pub async fn fetch_contract_employees() -> Result<Vec<ContractEmployee>, String> {
    get_json("/api/a005/contract-employees").await
}
