use serde::{Deserialize, Serialize};

use super::aggregate::Proposal;
use crate::shared::list_view::{aggregate, Aggregator};

/// KPI cards of the proposals page
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalStats {
    pub total: usize,
    pub signed: usize,
    pub total_value: f64,
    pub average_value: Option<f64>,
}

impl ProposalStats {
    pub fn compute(subset: &[Proposal]) -> Self {
        Self {
            total: aggregate(subset, &Aggregator::Count).as_count(),
            signed: aggregate(subset, &Aggregator::CountWhere(Proposal::is_signed)).as_count(),
            total_value: aggregate(subset, &Aggregator::Sum(|p: &Proposal| p.total_value as f64))
                .as_f64()
                .unwrap_or(0.0),
            average_value: aggregate(subset, &Aggregator::Mean(|p: &Proposal| p.total_value as f64)).as_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_proposal::aggregate::tests::sample;

    #[test]
    fn test_compute() {
        let stats = ProposalStats::compute(&sample());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.signed, 1);
        assert_eq!(stats.total_value, 1_320_000.0);
        assert_eq!(stats.average_value, Some(440_000.0));
    }

    #[test]
    fn test_empty_subset() {
        let stats = ProposalStats::compute(&[]);
        assert_eq!(stats, ProposalStats::default());
        assert_eq!(stats.average_value, None);
    }
}
