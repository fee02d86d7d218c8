//! Filter / aggregate / group pipeline for list and board views
//!
//! Everything here is a pure function of (record set, params). Pages own a
//! [`ListViewModel`] and re-read the derived values after each setter call.
//!
//! ```rust,ignore
//! use contracts::shared::list_view::{ListViewModel, Aggregator, Scope};
//!
//! let mut model = ListViewModel::new(proposals);
//! model.set_query("kitchen");
//! model.set_facet(ProposalFacet::Status, "sent");
//! let rows = model.page_view();
//! let pipeline = model.aggregate(&Aggregator::Sum(|p| p.total_value as f64), Scope::Filtered);
//! ```

mod aggregate;
mod error;
mod filter;
mod group;
mod model;
mod pagination;
mod params;

#[cfg(test)]
mod fixtures;

pub use aggregate::{aggregate, count_where, mean_of, sum_of, AggregateValue, Aggregator};
pub use error::ListViewError;
pub use filter::{distinct_facet_values, filter, matches, sort_records};
pub use group::{group_by_column, Column};
pub use model::{ListViewModel, Scope, DEFAULT_PAGE_SIZE};
pub use pagination::{paginate, total_pages, Page};
pub use params::{FacetSelection, ListParams, ListRecord, SortDirection, SortSpec, ALL};
