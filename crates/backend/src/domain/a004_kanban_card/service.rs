use contracts::domain::a004_kanban_card::{
    board as group_board, KanbanBoard, KanbanCard, KanbanCardFacet, KanbanStats,
};
use contracts::domain::common::ListResponse;

use super::repository;
use crate::shared::config::list_config;
use crate::shared::export::{to_csv, CsvRow};
use crate::shared::list_query::{filter_all, run_query, ListQuery, ListQueryError};

pub async fn list_all() -> anyhow::Result<Vec<KanbanCard>> {
    Ok(repository::list_all().to_vec())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<KanbanCard>> {
    Ok(repository::get_by_id(id))
}

/// Порядок колонок полный, группировка здесь не падает
fn stats(subset: &[KanbanCard]) -> KanbanStats {
    KanbanStats::compute(subset).unwrap_or_default()
}

pub fn query(query: &ListQuery) -> Result<ListResponse<KanbanCard, KanbanStats>, ListQueryError> {
    run_query(
        repository::list_all(),
        query,
        KanbanCardFacet::all(),
        stats,
        list_config(),
    )
}

/// Доска по отфильтрованному набору, все пять колонок
pub fn board(query: &ListQuery) -> Result<KanbanBoard, ListQueryError> {
    let subset = filter_all(repository::list_all(), query)?;
    Ok(KanbanBoard {
        total: subset.len(),
        columns: group_board(&subset)?,
    })
}

pub fn export_csv(query: &ListQuery) -> Result<String, ListQueryError> {
    to_csv(&filter_all(repository::list_all(), query)?)
}

impl CsvRow for KanbanCard {
    fn headers() -> &'static [&'static str] {
        &["Title", "Column", "Priority", "Assignee", "Tags", "Points", "Due"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.column.display_name().to_string(),
            self.priority.display_name().to_string(),
            self.assignee.clone(),
            self.tags.join(";"),
            self.story_points.to_string(),
            self.due_date.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_kanban_card::KanbanColumn;
    use std::collections::HashMap;

    #[test]
    fn test_board_has_all_columns() {
        let board = board(&ListQuery::default()).unwrap();
        assert_eq!(board.columns.len(), 5);
        assert_eq!(board.total, 7);
        let review = &board.columns[3];
        assert_eq!(review.bucket, KanbanColumn::Review);
        assert!(review.is_empty());
    }

    #[test]
    fn test_filtered_board() {
        let mut map = HashMap::new();
        map.insert("assignee".to_string(), "Arjun Rao".to_string());
        let board = board(&ListQuery::from_map(map).unwrap()).unwrap();
        assert_eq!(board.total, 2);
        assert_eq!(board.columns[1].len(), 1);
        assert_eq!(board.columns[2].len(), 1);
    }

    #[test]
    fn test_query_stats() {
        let response = query(&ListQuery::default()).unwrap();
        assert_eq!(response.stats_all.critical, 1);
        assert_eq!(response.stats_all.story_points, 27.0);
    }

    #[test]
    fn test_export_joins_tags() {
        let csv = export_csv(&ListQuery::default()).unwrap();
        assert!(csv.contains("production;hardware"));
    }
}
