pub mod cost;
pub mod filter;

pub use cost::{AnnualExtras, CostBasis, CostError, CostSummary, compute_cost};
pub use filter::{FilterCriteria, filter};
