//! Owned state of one list page: immutable records plus filter/page params

use std::fmt::Debug;

use super::aggregate::{aggregate, AggregateValue, Aggregator};
use super::error::ListViewError;
use super::filter::{distinct_facet_values, filter};
use super::group::{group_by_column, Column};
use super::pagination::{paginate, Page};
use super::params::{FacetSelection, ListParams, ListRecord, SortDirection, SortSpec};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which records an aggregate is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Filtered,
}

/// View model of a list page.
///
/// Records are fixed at construction. Params only change through the setters
/// below; every getter re-derives its result from (records, params).
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel<R: ListRecord> {
    records: Vec<R>,
    params: ListParams<R::Facet, R::SortKey>,
    page: usize,
    page_size: usize,
}

impl<R: ListRecord + Clone> ListViewModel<R> {
    pub fn new(records: Vec<R>) -> Self {
        let params = ListParams {
            sort: R::default_sort(),
            ..ListParams::default()
        };
        Self {
            records,
            params,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn params(&self) -> &ListParams<R::Facet, R::SortKey> {
        &self.params
    }

    pub fn query(&self) -> &str {
        &self.params.query
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> Option<SortSpec<R::SortKey>> {
        self.params.sort
    }

    pub fn selection(&self, facet: R::Facet) -> &FacetSelection {
        self.params.selection(facet)
    }

    pub fn has_active_filters(&self) -> bool {
        self.params.has_active_filters()
    }

    // ------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.params.query = query.into();
        self.page = 0;
    }

    /// Select a facet value; `"all"` disables the facet
    pub fn set_facet(&mut self, facet: R::Facet, value: &str) {
        self.params
            .facets
            .insert(facet, FacetSelection::from_param(value));
        self.page = 0;
    }

    pub fn clear_facet(&mut self, facet: R::Facet) {
        self.params.facets.remove(&facet);
        self.page = 0;
    }

    /// Back to an empty query, all facets disabled and the page's fixed sort
    pub fn reset_filters(&mut self) {
        self.params = ListParams {
            sort: R::default_sort(),
            ..ListParams::default()
        };
        self.page = 0;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec<R::SortKey>>) {
        self.params.sort = sort;
        self.page = 0;
    }

    /// Column-header click: same key flips direction, a new key starts ascending
    pub fn toggle_sort(&mut self, key: R::SortKey) {
        let next = match self.params.sort {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.reversed(),
            },
            _ => SortSpec {
                key,
                direction: SortDirection::Asc,
            },
        };
        self.set_sort(Some(next));
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn filtered(&self) -> Vec<R> {
        filter(&self.records, &self.params)
    }

    pub fn page_view(&self) -> Page<R> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn aggregate(&self, aggregator: &Aggregator<R>, scope: Scope) -> AggregateValue {
        match scope {
            Scope::All => aggregate(&self.records, aggregator),
            Scope::Filtered => aggregate(&self.filtered(), aggregator),
        }
    }

    pub fn board<B, F>(&self, bucket_key: F, bucket_order: &[B]) -> Result<Vec<Column<B, R>>, ListViewError>
    where
        B: Copy + PartialEq + Debug,
        F: Fn(&R) -> B,
    {
        group_by_column(&self.filtered(), bucket_key, bucket_order)
    }

    /// Options for a facet select, taken from the full record set
    pub fn facet_options(&self, facet: R::Facet) -> Vec<String> {
        distinct_facet_values(&self.records, facet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::fixtures::{employees, Employee, EmployeeFacet, EmployeeSortKey, STAGES};

    fn salary(e: &Employee) -> f64 {
        e.salary as f64
    }

    #[test]
    fn test_model_filters_through_setters() {
        let mut model = ListViewModel::new(employees());
        assert_eq!(model.filtered().len(), 6);

        model.set_facet(EmployeeFacet::Department, "Production");
        model.set_facet(EmployeeFacet::Status, "active");
        assert_eq!(model.filtered().len(), 3);
        assert!(model.has_active_filters());

        model.set_facet(EmployeeFacet::Status, "all");
        assert_eq!(model.filtered().len(), 5);

        model.reset_filters();
        assert_eq!(model.filtered().len(), 6);
        assert!(!model.has_active_filters());
    }

    #[test]
    fn test_aggregate_scopes() {
        let mut model = ListViewModel::new(employees());
        model.set_facet(EmployeeFacet::Department, "Production");
        model.set_facet(EmployeeFacet::Status, "active");

        assert_eq!(
            model.aggregate(&Aggregator::Sum(salary), Scope::Filtered),
            AggregateValue::Sum(600_000.0)
        );
        assert_eq!(
            model.aggregate(&Aggregator::Count, Scope::All),
            AggregateValue::Count(6)
        );
    }

    #[test]
    fn test_changing_filters_resets_page() {
        let mut model = ListViewModel::new(employees()).with_page_size(2);
        model.set_page(2);
        assert_eq!(model.page_view().items.len(), 2);
        assert_eq!(model.page_view().page, 2);

        model.set_query("a");
        assert_eq!(model.page_index(), 0);
    }

    #[test]
    fn test_toggle_sort() {
        let mut model = ListViewModel::new(employees());
        assert_eq!(model.sort(), None);

        model.toggle_sort(EmployeeSortKey::Salary);
        assert_eq!(model.sort(), Some(SortSpec::asc(EmployeeSortKey::Salary)));
        assert_eq!(model.filtered()[0].id, "E1");

        model.toggle_sort(EmployeeSortKey::Salary);
        assert_eq!(model.sort(), Some(SortSpec::desc(EmployeeSortKey::Salary)));
        assert_eq!(model.filtered()[0].id, "E3");

        model.toggle_sort(EmployeeSortKey::Name);
        assert_eq!(model.sort(), Some(SortSpec::asc(EmployeeSortKey::Name)));
    }

    #[test]
    fn test_board_follows_filters() {
        let mut model = ListViewModel::new(employees());
        model.set_query("hinge");
        let board = model.board(|e| e.stage, &STAGES).unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(board.iter().map(|c| c.len()).sum::<usize>(), 1);
    }

    #[test]
    fn test_facet_options_ignore_filters() {
        let mut model = ListViewModel::new(employees());
        model.set_facet(EmployeeFacet::Department, "Quality");
        assert_eq!(model.facet_options(EmployeeFacet::Department).len(), 2);
    }
}
