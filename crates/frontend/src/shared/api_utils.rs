//! API utilities for frontend-backend communication
//!
//! Все запросы идут на порт 3000; ошибки приводятся к `String` для показа
//! на странице.

use contracts::shared::list_view::ListParams;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Outcome of a request whose 404 is an expected answer
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Found(T),
    NotFound,
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// GET where 404 means "no such record" rather than a failure
pub async fn get_optional<T: DeserializeOwned>(path: &str) -> Result<Fetched<T>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if response.status() == 404 {
        return Ok(Fetched::NotFound);
    }
    read_json(response).await.map(Fetched::Found)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// Query string understood by the `/query` and `/export` endpoints
pub fn list_query_string<F, K>(params: &ListParams<F, K>) -> String
where
    F: Ord + Copy + Display,
    K: Copy + Display,
{
    let mut pairs: BTreeMap<String, String> = BTreeMap::new();
    if let Some(q) = params.normalized_query() {
        pairs.insert("q".into(), q);
    }
    for (facet, value) in params.active_facets() {
        pairs.insert(facet.to_string(), value.to_string());
    }
    if let Some(sort) = params.sort {
        pairs.insert("sort".into(), sort.key.to_string());
        pairs.insert("dir".into(), sort.direction.as_str().to_string());
    }
    serde_qs::to_string(&pairs).unwrap_or_default()
}

/// Open the CSV export of the current filter in a new window
pub fn open_export<F, K>(path: &str, params: &ListParams<F, K>)
where
    F: Ord + Copy + Display,
    K: Copy + Display,
{
    let url = format!("{}?{}", api_url(path), list_query_string(params));
    log::info!("export: {}", url);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url(&url) {
            log::error!("failed to open export window: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_proposal::{ProposalFacet, ProposalSortKey};
    use contracts::shared::list_view::SortSpec;

    #[test]
    fn test_list_query_string() {
        let params: ListParams<ProposalFacet, ProposalSortKey> = ListParams::default()
            .with_query("  Kitchen ")
            .with_facet(ProposalFacet::Status, "sent")
            .with_sort(SortSpec::desc(ProposalSortKey::TotalValue));

        let qs = list_query_string(&params);
        assert_eq!(qs, "dir=desc&q=kitchen&sort=total_value&status=sent");
    }

    #[test]
    fn test_empty_params() {
        let params: ListParams<ProposalFacet, ProposalSortKey> =
            ListParams::default().with_facet(ProposalFacet::Status, "all");
        assert_eq!(list_query_string(&params), "");
    }
}
