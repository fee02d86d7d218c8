//! KPI reductions over a record subset

use serde::{Deserialize, Serialize};

/// Reduction applied to a subset.
///
/// `Sum` and `Mean` read raw stored values (whole rupees for money); scaling
/// to lakh/crore belongs to display formatting only.
pub enum Aggregator<R> {
    Count,
    Sum(fn(&R) -> f64),
    Mean(fn(&R) -> f64),
    CountWhere(fn(&R) -> bool),
}

/// Result of an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AggregateValue {
    Count(usize),
    Sum(f64),
    /// `None` for an empty subset
    Mean(Option<f64>),
}

impl AggregateValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Count(n) => Some(*n as f64),
            Self::Sum(v) => Some(*v),
            Self::Mean(v) => *v,
        }
    }

    pub fn as_count(&self) -> usize {
        match self {
            Self::Count(n) => *n,
            Self::Sum(v) => *v as usize,
            Self::Mean(v) => v.map(|x| x as usize).unwrap_or(0),
        }
    }
}

pub fn aggregate<R>(subset: &[R], aggregator: &Aggregator<R>) -> AggregateValue {
    match aggregator {
        Aggregator::Count => AggregateValue::Count(subset.len()),
        Aggregator::Sum(field) => AggregateValue::Sum(subset.iter().map(field).sum()),
        Aggregator::Mean(field) => {
            if subset.is_empty() {
                AggregateValue::Mean(None)
            } else {
                let total: f64 = subset.iter().map(field).sum();
                AggregateValue::Mean(Some(total / subset.len() as f64))
            }
        }
        Aggregator::CountWhere(pred) => {
            AggregateValue::Count(subset.iter().filter(|r| pred(r)).count())
        }
    }
}

/// Shorthand for a `Count` / `CountWhere` result
pub fn count_where<R>(subset: &[R], pred: fn(&R) -> bool) -> usize {
    aggregate(subset, &Aggregator::CountWhere(pred)).as_count()
}

/// Shorthand for a `Sum` result
pub fn sum_of<R>(subset: &[R], field: fn(&R) -> f64) -> f64 {
    aggregate(subset, &Aggregator::Sum(field))
        .as_f64()
        .unwrap_or(0.0)
}

/// Shorthand for a `Mean` result
pub fn mean_of<R>(subset: &[R], field: fn(&R) -> f64) -> Option<f64> {
    aggregate(subset, &Aggregator::Mean(field)).as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::filter::filter;
    use crate::shared::list_view::fixtures::{employees, Employee, EmployeeFacet, EmployeeSortKey};
    use crate::shared::list_view::params::ListParams;

    fn salary(e: &Employee) -> f64 {
        e.salary as f64
    }

    fn three_rows() -> Vec<Employee> {
        let params = ListParams::<EmployeeFacet, EmployeeSortKey>::default()
            .with_facet(EmployeeFacet::Department, "Production")
            .with_facet(EmployeeFacet::Status, "active");
        filter(&employees(), &params)
    }

    #[test]
    fn test_sum_and_mean() {
        let rows = three_rows();
        assert_eq!(aggregate(&rows, &Aggregator::Sum(salary)), AggregateValue::Sum(600_000.0));
        assert_eq!(
            aggregate(&rows, &Aggregator::Mean(salary)),
            AggregateValue::Mean(Some(200_000.0))
        );
    }

    #[test]
    fn test_count_and_count_where() {
        let rows = employees();
        assert_eq!(aggregate(&rows, &Aggregator::Count), AggregateValue::Count(6));
        assert_eq!(count_where(&rows, |e| e.status == "pending"), 2);
    }

    #[test]
    fn test_empty_subset() {
        let rows: Vec<Employee> = Vec::new();
        assert_eq!(aggregate(&rows, &Aggregator::Count), AggregateValue::Count(0));
        assert_eq!(aggregate(&rows, &Aggregator::Sum(salary)), AggregateValue::Sum(0.0));
        assert_eq!(aggregate(&rows, &Aggregator::Mean(salary)), AggregateValue::Mean(None));
        assert_eq!(mean_of(&rows, salary), None);
        assert_eq!(sum_of(&rows, salary), 0.0);
    }

    #[test]
    fn test_large_amounts_are_summed_unscaled() {
        // 3 x 45 crore in rupees, exactly representable
        let mut rows = three_rows();
        for r in rows.iter_mut() {
            r.salary = 450_000_000;
        }
        assert_eq!(sum_of(&rows, salary), 1_350_000_000.0);
    }
}
