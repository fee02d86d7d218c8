use contracts::domain::a001_proposal::{Proposal, ProposalStatus};

use crate::shared::data::store::{get_store, seed_date};

pub fn list_all() -> &'static [Proposal] {
    &get_store().proposals
}

pub fn get_by_id(id: &str) -> Option<Proposal> {
    list_all().iter().find(|p| p.id == id).cloned()
}

#[allow(clippy::too_many_arguments)]
fn proposal(
    n: u32,
    title: &str,
    customer: &str,
    email: &str,
    status: ProposalStatus,
    total_value: i64,
    created: (u32, u32),
    views: u32,
) -> Proposal {
    let created_date = seed_date(2025, created.0, created.1);
    Proposal {
        id: format!("prop-{:03}", n),
        proposal_number: format!("PROP-2025-{:03}", n),
        title: title.to_string(),
        customer_name: customer.to_string(),
        contact_email: email.to_string(),
        status,
        total_value,
        valid_until: created_date + chrono::Duration::days(30),
        created_date,
        sections: 4 + n % 4,
        views,
    }
}

/// Тестовый набор предложений
pub fn seed() -> Vec<Proposal> {
    use ProposalStatus::*;
    vec![
        proposal(1, "Premium Modular Kitchen - L Shape", "Sharma Residence", "rajesh.sharma@example.in", Signed, 850_000, (9, 2), 14),
        proposal(2, "Walk-in Wardrobe with Lighting", "Mehta Villas", "anita.mehta@example.in", Viewed, 420_000, (9, 18), 6),
        proposal(3, "Kitchen Appliance Bundle", "Green Valley Apartments", "procurement@greenvalley.in", Sent, 275_000, (10, 1), 0),
        proposal(4, "Hotel Pantry Fit-out", "Taj Lake Residency", "projects@tajlake.in", Draft, 1_850_000, (10, 5), 0),
        proposal(5, "Island Kitchen with Quartz Top", "Kapoor Bungalow", "vikram.kapoor@example.in", Signed, 1_240_000, (8, 22), 21),
        proposal(6, "Builder Package - 48 Kitchens", "Prestige Developers", "cpq@prestige.in", Sent, 24_600_000, (10, 9), 3),
        proposal(7, "Compact Parallel Kitchen", "Iyer Flat 4B", "s.iyer@example.in", Viewed, 310_000, (9, 27), 2),
        proposal(8, "Office Cafeteria Counters", "Infotech Park Phase II", "facilities@infotech.in", Draft, 960_000, (10, 12), 0),
    ]
}
