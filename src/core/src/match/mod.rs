pub mod engine;
pub mod game;
pub mod input;
pub mod result;
pub mod settings;
pub mod squad;

pub use engine::*;
pub use game::*;
pub use result::*;
pub use settings::*;
pub use squad::*;
