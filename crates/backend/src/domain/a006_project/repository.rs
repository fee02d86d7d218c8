use contracts::domain::a006_project::{Project, ProjectStatus, ShutterSpecs};

use crate::shared::data::store::seed_date;

#[allow(clippy::too_many_arguments)]
fn project(
    n: u32,
    name: &str,
    customer: &str,
    status: ProjectStatus,
    location: &str,
    start: (i32, u32, u32),
    months: i64,
    budget: i64,
    progress: u8,
) -> Project {
    let start_date = seed_date(start.0, start.1, start.2);
    Project {
        id: format!("prj-{:03}", n),
        project_code: format!("PRJ-2025-{:03}", n),
        name: name.to_string(),
        customer_name: customer.to_string(),
        status,
        location: location.to_string(),
        start_date,
        end_date: start_date + chrono::Duration::days(months * 30),
        budget,
        progress,
    }
}

pub fn seed_projects() -> Vec<Project> {
    use ProjectStatus::*;
    vec![
        project(1, "Lodha Tower Kitchens", "Lodha Group", InProgress, "Mumbai", (2025, 4, 1), 12, 17_600_000, 45),
        project(2, "Kapoor Bungalow Interiors", "Vikram Kapoor", InProgress, "Pune", (2025, 7, 15), 4, 2_250_000, 70),
        project(3, "Infotech Cafeteria", "Infotech Park", OnHold, "Bengaluru", (2025, 5, 20), 3, 3_300_000, 30),
        project(4, "Green Valley Block C", "Green Valley Apartments", Planning, "Nashik", (2025, 11, 1), 9, 6_000_000, 0),
        project(5, "Sharma Residence Kitchen", "Rajesh Sharma", Completed, "Pune", (2025, 2, 3), 2, 850_000, 100),
    ]
}

/// У проекта prj-004 спецификаций ещё нет
pub fn seed_shutter_specs() -> Vec<ShutterSpecs> {
    vec![
        ShutterSpecs {
            project_id: "prj-001".into(),
            shutter_type: "Handleless (G-profile)".into(),
            material: "BWP Plywood".into(),
            finish: "Acrylic high-gloss".into(),
            width_mm: 600,
            height_mm: 720,
            quantity: 480,
            notes: "48 units x 10 shutters".into(),
            updated_at: Some(seed_date(2025, 9, 12)),
        },
        ShutterSpecs {
            project_id: "prj-002".into(),
            shutter_type: "Profile handle".into(),
            material: "HDHMR".into(),
            finish: "PU matte".into(),
            width_mm: 450,
            height_mm: 720,
            quantity: 22,
            notes: String::new(),
            updated_at: Some(seed_date(2025, 8, 2)),
        },
        ShutterSpecs {
            project_id: "prj-003".into(),
            shutter_type: "Flush".into(),
            material: "MDF".into(),
            finish: "Laminate".into(),
            width_mm: 500,
            height_mm: 700,
            quantity: 36,
            notes: String::new(),
            updated_at: None,
        },
        ShutterSpecs {
            project_id: "prj-005".into(),
            shutter_type: "Glass frame".into(),
            material: "Aluminium".into(),
            finish: "Frosted glass".into(),
            width_mm: 400,
            height_mm: 700,
            quantity: 6,
            notes: String::new(),
            updated_at: Some(seed_date(2025, 3, 1)),
        },
    ]
}
