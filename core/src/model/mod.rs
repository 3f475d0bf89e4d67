pub mod score;
pub mod types;

pub use score::*;
pub use types::*;
