//! Text search, facet filtering and sorting

use super::params::{ListParams, ListRecord, SortSpec};

/// Whether a record passes the query and every active facet
pub fn matches<R: ListRecord>(record: &R, params: &ListParams<R::Facet, R::SortKey>) -> bool {
    if let Some(query) = params.normalized_query() {
        let hit = record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
        if !hit {
            return false;
        }
    }

    params
        .active_facets()
        .all(|(facet, value)| record.facet_value(facet) == value)
}

/// Filter records by params.
///
/// Relative order of the input is kept; when `params.sort` is set the result
/// is additionally stable-sorted by that comparator.
pub fn filter<R>(records: &[R], params: &ListParams<R::Facet, R::SortKey>) -> Vec<R>
where
    R: ListRecord + Clone,
{
    let mut subset: Vec<R> = records
        .iter()
        .filter(|record| matches(*record, params))
        .cloned()
        .collect();

    if let Some(spec) = params.sort {
        sort_records(&mut subset, spec);
    }

    subset
}

/// Stable sort; equal rows keep their relative order
pub fn sort_records<R: ListRecord>(records: &mut [R], spec: SortSpec<R::SortKey>) {
    records.sort_by(|a, b| spec.direction.apply(a.compare_by(b, spec.key)));
}

/// Distinct values of a facet in first-seen order (options for a facet select)
pub fn distinct_facet_values<R: ListRecord>(records: &[R], facet: R::Facet) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = record.facet_value(facet);
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::fixtures::{employees, Employee, EmployeeFacet, EmployeeSortKey};
    use crate::shared::list_view::params::SortDirection;

    type Params = ListParams<EmployeeFacet, EmployeeSortKey>;

    fn ids(rows: &[Employee]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = employees();
        let params = Params::default()
            .with_query("a")
            .with_facet(EmployeeFacet::Department, "Production");
        let once = filter(&records, &params);
        let twice = filter(&once, &params);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_facets_combine_with_and() {
        let records = employees();
        let params = Params::default()
            .with_facet(EmployeeFacet::Department, "Production")
            .with_facet(EmployeeFacet::Status, "active");
        let result = filter(&records, &params);
        assert_eq!(result.len(), 3);
        assert!(result
            .iter()
            .all(|r| r.department == "Production" && r.status == "active"));

        let pending = Params::default()
            .with_facet(EmployeeFacet::Department, "Production")
            .with_facet(EmployeeFacet::Status, "pending");
        assert_eq!(filter(&records, &pending).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = employees();
        let params = Params::default().with_query("kit");
        let result = filter(&records, &params);
        assert_eq!(ids(&result), vec!["E1"]);
        assert_eq!(result[0].name, "Premium Kitchen Sink");

        let upper = Params::default().with_query("  KITCHEN ");
        assert_eq!(ids(&filter(&records, &upper)), vec!["E1"]);
    }

    #[test]
    fn test_all_sentinel_equals_missing_facet() {
        let records = employees();
        let with_all = Params::default()
            .with_query("e")
            .with_facet(EmployeeFacet::Status, "all");
        let without = Params::default().with_query("e");
        assert_eq!(filter(&records, &with_all), filter(&records, &without));
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let records = employees();
        let result = filter(&records, &Params::default());
        assert_eq!(ids(&result), ids(&records));
    }

    #[test]
    fn test_facet_match_is_case_sensitive() {
        let records = employees();
        let params = Params::default().with_facet(EmployeeFacet::Status, "Active");
        assert!(filter(&records, &params).is_empty());
    }

    #[test]
    fn test_unknown_facet_value_gives_empty_subset() {
        let records = employees();
        let params = Params::default().with_facet(EmployeeFacet::Department, "Marketing");
        assert!(filter(&records, &params).is_empty());
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<Employee> = Vec::new();
        let params = Params::default()
            .with_query("x")
            .with_facet(EmployeeFacet::Status, "active");
        assert!(filter(&records, &params).is_empty());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = employees();
        let params = Params::default().with_sort(SortSpec {
            key: EmployeeSortKey::Salary,
            direction: SortDirection::Desc,
        });
        let result = filter(&records, &params);
        // E3 and E5 share the top salary and keep their input order
        assert_eq!(&ids(&result)[..2], &["E3", "E5"]);
        let salaries: Vec<i64> = result.iter().map(|r| r.salary).collect();
        let mut sorted = salaries.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(salaries, sorted);
    }

    #[test]
    fn test_distinct_facet_values_first_seen_order() {
        let records = employees();
        assert_eq!(
            distinct_facet_values(&records, EmployeeFacet::Department),
            vec!["Production".to_string(), "Quality".to_string()]
        );
        assert_eq!(
            distinct_facet_values(&records, EmployeeFacet::Status),
            vec!["active".to_string(), "pending".to_string()]
        );
    }
}
