pub mod strategies;
pub mod tracking;

pub use strategies::*;
pub use tracking::*;
