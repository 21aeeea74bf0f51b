mod time;
mod vector;

pub use time::*;
pub use vector::*;
