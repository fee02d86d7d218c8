use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::list_view::{Column, Page};

/// Server-side list query result: one page plus KPI stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T, S> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Stats over the whole record set
    pub stats_all: S,
    /// Stats over the filtered subset
    pub stats_filtered: S,
    /// Facet name -> distinct values, for select boxes
    pub facet_options: BTreeMap<String, Vec<String>>,
}

impl<T, S> ListResponse<T, S> {
    pub fn from_page(
        page: Page<T>,
        stats_all: S,
        stats_filtered: S,
        facet_options: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            stats_all,
            stats_filtered,
            facet_options,
        }
    }
}

/// Grouped board: every bucket present, empty ones included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardResponse<B, T> {
    pub columns: Vec<Column<B, T>>,
    pub total: usize,
}

/// Result of a draft check; nothing is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub ok: bool,
    pub errors: crate::shared::metadata::ValidationErrors,
}
