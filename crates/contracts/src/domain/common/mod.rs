//! Common types shared by all list records

pub mod badge;
pub mod list_response;
pub mod wire_enum;

// Re-exports
pub use badge::BadgeVariant;
pub use list_response::{BoardResponse, ListResponse, ValidateResponse};
