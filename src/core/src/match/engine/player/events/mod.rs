mod models;
mod players;

pub use models::*;
pub use players::*;
