pub mod betting;
pub use betting::*;

pub mod engine;
pub use engine::*;

pub mod gamedef;
pub use gamedef::*;

pub mod moves;
pub use moves::*;

pub mod showdown;
pub use showdown::*;
