pub mod config;
pub mod data;
pub mod export;
pub mod format;
pub mod list_query;
pub mod logger;
