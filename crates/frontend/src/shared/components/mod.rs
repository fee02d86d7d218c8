pub mod form_field;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;

pub use form_field::{FieldError, FormProgressBar, NumberField, TextField};
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
