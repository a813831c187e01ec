pub mod catalog;
pub mod error;
pub mod features;
pub mod prediction;
pub mod selection;
pub mod stats;

pub use catalog::*;
pub use error::*;
pub use features::*;
pub use prediction::*;
pub use selection::*;
pub use stats::*;
