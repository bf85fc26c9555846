pub mod collision;
pub mod input;
pub mod movement;
pub mod reset;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use reset::*;
pub use scoring::*;
