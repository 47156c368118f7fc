//! selection of the installment option shown for an offer
//!
//! All functions borrow the candidate list and return references into it;
//! inputs are never reordered or mutated.

pub mod cluster;
pub mod filter;
pub mod max;

pub use cluster::{pick_by_cluster, pick_by_cluster_with};
pub use filter::apply_filters;
pub use max::{pick_max, pick_max_no_interest};
