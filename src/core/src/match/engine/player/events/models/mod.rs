mod passing;
mod shooting;

pub use passing::*;
pub use shooting::*;
