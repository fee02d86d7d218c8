use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::{BadgeVariant, BoardResponse};
use crate::shared::list_view::{
    aggregate, group_by_column, Aggregator, Column, ListRecord, ListViewError,
};
use crate::wire_enum;

wire_enum! {
    /// Колонки доски в порядке отображения
    pub enum KanbanColumn ("kanban column") {
        Backlog => "backlog", "Backlog";
        Todo => "todo", "To Do";
        InProgress => "in-progress", "In Progress";
        Review => "review", "Review";
        Done => "done", "Done";
    }
}

wire_enum! {
    /// Declaration order is severity order
    pub enum CardPriority ("card priority") {
        Low => "low", "Low";
        Medium => "medium", "Medium";
        High => "high", "High";
        Critical => "critical", "Critical";
    }
}

impl CardPriority {
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Low => BadgeVariant::Neutral,
            Self::Medium => BadgeVariant::Primary,
            Self::High => BadgeVariant::Warning,
            Self::Critical => BadgeVariant::Error,
        }
    }
}

wire_enum! {
    pub enum KanbanCardFacet [ListViewError::UnknownFacet] {
        Priority => "priority", "Priority";
        Assignee => "assignee", "Assignee";
    }
}

wire_enum! {
    pub enum KanbanCardSortKey [ListViewError::UnknownSortKey] {
        Priority => "priority", "Priority";
        DueDate => "due_date", "Due date";
        StoryPoints => "story_points", "Points";
        Title => "title", "Title";
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub column: KanbanColumn,
    pub priority: CardPriority,
    pub assignee: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub story_points: u32,
    pub due_date: Option<NaiveDate>,
}

impl KanbanCard {
    pub fn is_critical(&self) -> bool {
        self.priority == CardPriority::Critical
    }
}

impl ListRecord for KanbanCard {
    type Facet = KanbanCardFacet;
    type SortKey = KanbanCardSortKey;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.assignee.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: KanbanCardFacet) -> &str {
        match facet {
            KanbanCardFacet::Priority => self.priority.as_str(),
            KanbanCardFacet::Assignee => self.assignee.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: KanbanCardSortKey) -> Ordering {
        match key {
            KanbanCardSortKey::Priority => self.priority.cmp(&other.priority),
            // карточки без срока идут последними
            KanbanCardSortKey::DueDate => match (self.due_date, other.due_date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            KanbanCardSortKey::StoryPoints => self.story_points.cmp(&other.story_points),
            KanbanCardSortKey::Title => self.title.cmp(&other.title),
        }
    }
}

pub type KanbanBoard = BoardResponse<KanbanColumn, KanbanCard>;

/// Group a subset into the five board columns, empty columns included
pub fn board(subset: &[KanbanCard]) -> Result<Vec<Column<KanbanColumn, KanbanCard>>, ListViewError> {
    group_by_column(subset, |card| card.column, KanbanColumn::all())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanStats {
    pub total: usize,
    pub story_points: f64,
    pub critical: usize,
    /// Card count per column, board order
    pub per_column: Vec<(KanbanColumn, usize)>,
}

impl KanbanStats {
    pub fn compute(subset: &[KanbanCard]) -> Result<Self, ListViewError> {
        let per_column = board(subset)?
            .iter()
            .map(|column| (column.bucket, column.len()))
            .collect();

        Ok(Self {
            total: aggregate(subset, &Aggregator::Count).as_count(),
            story_points: aggregate(subset, &Aggregator::Sum(|c: &KanbanCard| c.story_points as f64))
                .as_f64()
                .unwrap_or(0.0),
            critical: aggregate(subset, &Aggregator::CountWhere(KanbanCard::is_critical)).as_count(),
            per_column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListViewModel;

    fn card(id: &str, column: KanbanColumn, priority: CardPriority, assignee: &str, tags: &[&str]) -> KanbanCard {
        KanbanCard {
            id: id.into(),
            title: format!("Task {}", id),
            description: String::new(),
            column,
            priority,
            assignee: assignee.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            story_points: 3,
            due_date: None,
        }
    }

    fn sample() -> Vec<KanbanCard> {
        use CardPriority::*;
        use KanbanColumn::*;
        vec![
            card("K1", Todo, High, "Priya", &["site-survey"]),
            card("K2", InProgress, Critical, "Arjun", &["installation", "urgent"]),
            card("K3", InProgress, Low, "Priya", &[]),
            card("K4", Done, Medium, "Meera", &["qc"]),
        ]
    }

    #[test]
    fn test_board_keeps_empty_columns() {
        let columns = board(&sample()).unwrap();
        let counts: Vec<usize> = columns.iter().map(|c| c.len()).collect();
        assert_eq!(counts, vec![0, 1, 2, 0, 1]);
        assert_eq!(columns[0].bucket, KanbanColumn::Backlog);
        assert!(columns[3].is_empty());
    }

    #[test]
    fn test_tags_are_searchable() {
        let mut model = ListViewModel::new(sample());
        model.set_query("urgent");
        let found = model.filtered();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "K2");
    }

    #[test]
    fn test_filtered_board() {
        let mut model = ListViewModel::new(sample());
        model.set_facet(KanbanCardFacet::Assignee, "Priya");
        let columns = model.board(|c| c.column, KanbanColumn::all()).unwrap();
        assert_eq!(columns.len(), 5);
        assert_eq!(columns.iter().map(|c| c.len()).sum::<usize>(), 2);
    }

    #[test]
    fn test_stats() {
        let stats = KanbanStats::compute(&sample()).unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.story_points, 12.0);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.per_column[2], (KanbanColumn::InProgress, 2));
    }

    #[test]
    fn test_priority_order() {
        assert!(CardPriority::Critical > CardPriority::High);
        assert_eq!("in-progress".parse::<KanbanColumn>(), Ok(KanbanColumn::InProgress));
    }
}
