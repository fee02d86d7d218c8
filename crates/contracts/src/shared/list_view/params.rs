//! Filter parameters and the record contract for list views

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::str::FromStr;

use super::error::ListViewError;

/// Wire sentinel that disables a facet
pub const ALL: &str = "all";

/// Selected value of a single facet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FacetSelection {
    /// Facet is disabled
    #[default]
    All,
    /// Exact, case-sensitive match on the record's facet value
    Only(String),
}

impl FacetSelection {
    /// Parse a select value; `"all"` and the empty string both disable the facet
    pub fn from_param(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Value to put back into a `<select>` or a query string
    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(v) => v.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => v == value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ListViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(ListViewError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Named comparator plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K> SortSpec<K> {
    pub fn asc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// A row that can be shown in a list view.
///
/// Facet names and sort keys are closed per-record enums, so a page can only
/// ask for dimensions the record actually has.
pub trait ListRecord {
    type Facet: Copy + Ord + Debug + FromStr<Err = ListViewError>;
    type SortKey: Copy + PartialEq + Debug + FromStr<Err = ListViewError>;

    /// Fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Exact wire value of the given facet for this record
    fn facet_value(&self, facet: Self::Facet) -> &str;

    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;

    /// Fixed comparator of the page, if any
    fn default_sort() -> Option<SortSpec<Self::SortKey>> {
        None
    }
}

/// Query text, facet selections and optional sort of one list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams<F: Ord, K> {
    pub query: String,
    pub facets: BTreeMap<F, FacetSelection>,
    pub sort: Option<SortSpec<K>>,
}

impl<F: Ord, K> Default for ListParams<F, K> {
    fn default() -> Self {
        Self {
            query: String::new(),
            facets: BTreeMap::new(),
            sort: None,
        }
    }
}

impl<F: Ord + Copy, K> ListParams<F, K> {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_facet(mut self, facet: F, value: &str) -> Self {
        self.facets.insert(facet, FacetSelection::from_param(value));
        self
    }

    pub fn with_sort(mut self, sort: SortSpec<K>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Trimmed, lowercased query; `None` when there is no text filter
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn selection(&self, facet: F) -> &FacetSelection {
        static ALL_SELECTION: FacetSelection = FacetSelection::All;
        self.facets.get(&facet).unwrap_or(&ALL_SELECTION)
    }

    /// Facets with a concrete value selected
    pub fn active_facets(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.facets.iter().filter_map(|(facet, sel)| match sel {
            FacetSelection::All => None,
            FacetSelection::Only(v) => Some((*facet, v.as_str())),
        })
    }

    pub fn has_active_filters(&self) -> bool {
        self.normalized_query().is_some() || self.active_facets().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_selection_from_param() {
        assert_eq!(FacetSelection::from_param("all"), FacetSelection::All);
        assert_eq!(FacetSelection::from_param(""), FacetSelection::All);
        assert_eq!(
            FacetSelection::from_param("active"),
            FacetSelection::Only("active".into())
        );
        assert_eq!(FacetSelection::from_param("All").as_param(), "All");
    }

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("down".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
    }

    #[test]
    fn test_normalized_query() {
        let params: ListParams<u8, u8> = ListParams::default().with_query("  KiT ");
        assert_eq!(params.normalized_query().as_deref(), Some("kit"));
        let blank: ListParams<u8, u8> = ListParams::default().with_query("   ");
        assert_eq!(blank.normalized_query(), None);
        assert!(!blank.has_active_filters());
    }
}
