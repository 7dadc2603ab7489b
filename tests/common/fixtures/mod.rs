
pub use worlds::*;
