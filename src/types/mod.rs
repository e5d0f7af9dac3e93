pub mod fix;
pub mod segment;

pub use fix::*;
pub use segment::*;
