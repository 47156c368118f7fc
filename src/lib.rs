pub mod config;
pub mod decimal;
pub mod errors;
pub mod installment;
pub mod selection;
pub mod types;
pub mod view;

// re-export key types
pub use config::DisplayPolicy;
pub use decimal::{Money, Rate};
pub use errors::{Result, SelectionError};
pub use installment::{InstallmentOption, InstallmentOptionBuilder};
pub use selection::{apply_filters, pick_by_cluster, pick_by_cluster_with, pick_max, pick_max_no_interest};
pub use types::{ClusterField, ClusterKey, CommercialOffer, FilterCriteria, InstallmentsCriteria};
pub use view::SelectionView;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
