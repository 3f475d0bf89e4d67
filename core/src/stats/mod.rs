pub mod context;
pub mod dashboard;
pub mod handicap;
pub mod hbh;
pub mod hole_totals;
pub mod normalize;
pub mod sort_utils;
pub mod validation;

pub use context::*;
pub use dashboard::*;
pub use handicap::*;
pub use hbh::*;
pub use hole_totals::*;
pub use normalize::*;
pub use sort_utils::*;
pub use validation::*;
