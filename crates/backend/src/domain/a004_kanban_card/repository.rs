use contracts::domain::a004_kanban_card::{CardPriority, KanbanCard, KanbanColumn};

use crate::shared::data::store::{get_store, seed_date};

pub fn list_all() -> &'static [KanbanCard] {
    &get_store().kanban_cards
}

pub fn get_by_id(id: &str) -> Option<KanbanCard> {
    list_all().iter().find(|c| c.id == id).cloned()
}

#[allow(clippy::too_many_arguments)]
fn card(
    n: u32,
    title: &str,
    column: KanbanColumn,
    priority: CardPriority,
    assignee: &str,
    tags: &[&str],
    story_points: u32,
    due: Option<(u32, u32)>,
) -> KanbanCard {
    KanbanCard {
        id: format!("card-{:03}", n),
        title: title.to_string(),
        description: String::new(),
        column,
        priority,
        assignee: assignee.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        story_points,
        due_date: due.map(|(m, d)| seed_date(2025, m, d)),
    }
}

/// Колонка "Review" намеренно пустая
pub fn seed() -> Vec<KanbanCard> {
    use CardPriority::*;
    use KanbanColumn::*;
    vec![
        card(1, "Site survey - Sharma Residence", Backlog, Medium, "Priya Nair", &["site-survey"], 3, None),
        card(2, "Finalize carcass drawings", Todo, High, "Arjun Rao", &["design", "drawings"], 5, Some((10, 20))),
        card(3, "Order quartz countertop", Todo, Critical, "Meera Joshi", &["procurement", "urgent"], 2, Some((10, 18))),
        card(4, "Cut list for shutters", InProgress, High, "Arjun Rao", &["production"], 8, Some((10, 24))),
        card(5, "Hinge and channel kitting", InProgress, Low, "Priya Nair", &["production", "hardware"], 3, None),
        card(6, "Install base units - Kapoor", Done, Medium, "Sunil Patil", &["installation"], 5, Some((10, 8))),
        card(7, "Customer walkthrough video", Backlog, Low, "Meera Joshi", &["marketing"], 1, None),
    ]
}
