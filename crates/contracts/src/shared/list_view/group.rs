//! Kanban-style grouping of a subset into fixed buckets

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::error::ListViewError;

/// One bucket of a grouped view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column<B, R> {
    pub bucket: B,
    pub items: Vec<R>,
}

impl<B, R> Column<B, R> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition `subset` into the buckets of `bucket_order` in a single pass.
///
/// Every bucket of `bucket_order` is present in the result (in that order),
/// including empty ones. A record whose key is not in `bucket_order` fails
/// the whole call with `UnknownBucketKind`.
pub fn group_by_column<R, B, F>(
    subset: &[R],
    bucket_key: F,
    bucket_order: &[B],
) -> Result<Vec<Column<B, R>>, ListViewError>
where
    R: Clone,
    B: Copy + PartialEq + Debug,
    F: Fn(&R) -> B,
{
    let mut columns: Vec<Column<B, R>> = bucket_order
        .iter()
        .map(|bucket| Column {
            bucket: *bucket,
            items: Vec::new(),
        })
        .collect();

    for record in subset {
        let key = bucket_key(record);
        let column = columns
            .iter_mut()
            .find(|c| c.bucket == key)
            .ok_or_else(|| ListViewError::UnknownBucketKind(format!("{:?}", key)))?;
        column.items.push(record.clone());
    }

    Ok(columns)
}
