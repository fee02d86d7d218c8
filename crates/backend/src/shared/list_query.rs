//! Query string -> list pipeline params for the `/query` and `/export` routes
//!
//! `?q=kit&status=active&sort=created&dir=desc&page=0&page_size=20`.
//! Every key that is not reserved is a facet name.

use axum::http::StatusCode;
use contracts::domain::common::ListResponse;
use contracts::shared::list_view::{
    distinct_facet_values, filter, paginate, FacetSelection, ListParams, ListRecord,
    ListViewError, SortDirection, SortSpec,
};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use thiserror::Error;

use super::config::ListConfig;

const RESERVED: [&str; 5] = ["q", "sort", "dir", "page", "page_size"];

#[derive(Debug, Error)]
pub enum ListQueryError {
    #[error("Invalid value for '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    ListView(#[from] ListViewError),

    #[error("CSV export failed: {0}")]
    Export(String),
}

impl ListQueryError {
    /// Bad input is the client's fault; export failures are ours
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Raw list query before it is checked against a record type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub q: String,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: usize,
    pub page_size: Option<usize>,
    pub facets: BTreeMap<String, String>,
}

fn parse_number(field: &'static str, value: &str) -> Result<usize, ListQueryError> {
    value.trim().parse().map_err(|_| ListQueryError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl ListQuery {
    pub fn from_map(map: HashMap<String, String>) -> Result<Self, ListQueryError> {
        let mut query = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "q" => query.q = value,
                "sort" if !value.is_empty() => query.sort = Some(value),
                "dir" if !value.is_empty() => query.dir = Some(value),
                "page" => query.page = parse_number("page", &value)?,
                "page_size" => query.page_size = Some(parse_number("page_size", &value)?),
                k if RESERVED.contains(&k) => {}
                _ => {
                    query.facets.insert(key, value);
                }
            }
        }
        Ok(query)
    }

    /// Check facet names, sort key and direction against the record type.
    ///
    /// Without `sort` the record's default comparator is used; `dir` alone
    /// flips it.
    pub fn to_params<R: ListRecord>(&self) -> Result<ListParams<R::Facet, R::SortKey>, ListQueryError> {
        let mut params = ListParams::default().with_query(self.q.clone());

        for (name, value) in &self.facets {
            let facet: R::Facet = name.parse()?;
            params.facets.insert(facet, FacetSelection::from_param(value));
        }

        let direction = self
            .dir
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()?;

        params.sort = match (&self.sort, R::default_sort()) {
            (Some(key), _) => Some(SortSpec {
                key: key.parse()?,
                direction: direction.unwrap_or_default(),
            }),
            (None, Some(default)) => Some(SortSpec {
                key: default.key,
                direction: direction.unwrap_or(default.direction),
            }),
            (None, None) => None,
        };

        Ok(params)
    }
}

/// Filter, sort and paginate `records`; stats over both the full and the
/// filtered set.
pub fn run_query<R, S>(
    records: &[R],
    query: &ListQuery,
    facets: &[R::Facet],
    stats: impl Fn(&[R]) -> S,
    list_config: ListConfig,
) -> Result<ListResponse<R, S>, ListQueryError>
where
    R: ListRecord + Clone,
    R::Facet: Display,
{
    let params = query.to_params::<R>()?;
    let filtered = filter(records, &params);
    let page = paginate(&filtered, query.page, list_config.page_size(query.page_size));

    let facet_options = facets
        .iter()
        .map(|facet| (facet.to_string(), distinct_facet_values(records, *facet)))
        .collect();

    Ok(ListResponse::from_page(
        page,
        stats(records),
        stats(filtered.as_slice()),
        facet_options,
    ))
}

/// Filtered and sorted subset, no pagination
pub fn filter_all<R: ListRecord + Clone>(records: &[R], query: &ListQuery) -> Result<Vec<R>, ListQueryError> {
    let params = query.to_params::<R>()?;
    Ok(filter(records, &params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_proposal::{Proposal, ProposalFacet, ProposalSortKey, ProposalStats};

    use crate::domain::a001_proposal::repository;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_map_splits_facets() {
        let query = ListQuery::from_map(map(&[
            ("q", "kitchen"),
            ("status", "sent"),
            ("page", "2"),
            ("page_size", "5"),
            ("sort", ""),
        ]))
        .unwrap();
        assert_eq!(query.q, "kitchen");
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, Some(5));
        assert_eq!(query.sort, None);
        assert_eq!(query.facets.get("status").map(String::as_str), Some("sent"));
    }

    #[test]
    fn test_bad_page_is_rejected() {
        let err = ListQuery::from_map(map(&[("page", "two")])).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_to_params() {
        let query = ListQuery::from_map(map(&[("status", "all"), ("dir", "asc")])).unwrap();
        let params = query.to_params::<Proposal>().unwrap();
        assert!(params.selection(ProposalFacet::Status).is_all());
        assert_eq!(params.sort, Some(SortSpec::asc(ProposalSortKey::CreatedDate)));

        let unknown_facet = ListQuery::from_map(map(&[("owner", "me")])).unwrap();
        assert!(matches!(
            unknown_facet.to_params::<Proposal>(),
            Err(ListQueryError::ListView(ListViewError::UnknownFacet(_)))
        ));

        let bad_dir = ListQuery::from_map(map(&[("sort", "title"), ("dir", "up")])).unwrap();
        assert!(bad_dir.to_params::<Proposal>().is_err());
    }

    #[test]
    fn test_run_query() {
        let records = repository::seed();
        let query = ListQuery::from_map(map(&[("status", "signed"), ("page_size", "1")])).unwrap();
        let response = run_query(
            &records,
            &query,
            ProposalFacet::all(),
            ProposalStats::compute,
            ListConfig::default(),
        )
        .unwrap();

        let signed = records.iter().filter(|p| p.is_signed()).count();
        assert_eq!(response.total_items, signed);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.stats_all.total, records.len());
        assert_eq!(response.stats_filtered.signed, signed);
        assert_eq!(response.facet_options["status"].len(), 4);
    }
}
