pub mod rounding;
pub mod search;
pub mod stats;

pub use rounding::round_to;
pub use search::argmin_abs_diff;
pub use stats::StatsHelper;
