pub mod r#match;
pub mod utils;

pub use nalgebra::Vector2;
