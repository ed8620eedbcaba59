mod geometry;
mod reducer;

pub use geometry::*;
pub use reducer::*;
