pub mod aggregate;

pub use aggregate::{
    board, CardPriority, KanbanBoard, KanbanCard, KanbanCardFacet, KanbanCardSortKey,
    KanbanColumn, KanbanStats,
};
