use crate::shared::api_utils::{get_json, get_optional, Fetched};
use contracts::domain::a001_proposal::Proposal;

pub const PROPOSALS_PATH: &str = "/api/a001/proposals";
pub const EXPORT_PATH: &str = "/api/a001/proposals/export";

/// Полный набор предложений; фильтрация на клиенте
pub async fn fetch_proposals() -> Result<Vec<Proposal>, String> {
    get_json(PROPOSALS_PATH).await
}

pub async fn fetch_proposal(id: &str) -> Result<Fetched<Proposal>, String> {
    get_optional(&format!("{}/{}", PROPOSALS_PATH, id)).await
}
