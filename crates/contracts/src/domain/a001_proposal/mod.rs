pub mod aggregate;
pub mod draft;
pub mod stats;

pub use aggregate::{Proposal, ProposalFacet, ProposalSortKey, ProposalStatus};
pub use draft::ProposalDraft;
pub use stats::ProposalStats;
