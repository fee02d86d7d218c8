use crate::shared::api_utils::get_json;
use contracts::domain::a004_kanban_card::KanbanCard;

pub async fn fetch_cards() -> Result<Vec<KanbanCard>, String> {
    get_json("/api/a004/kanban/cards").await
}
