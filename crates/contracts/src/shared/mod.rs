pub mod format;
pub mod list_view;
pub mod metadata;
