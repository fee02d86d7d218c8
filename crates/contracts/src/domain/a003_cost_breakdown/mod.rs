pub mod aggregate;

pub use aggregate::{
    BudgetStatus, CostBreakdown, CostBreakdownFacet, CostBreakdownSortKey, CostBreakdownStats,
};
