pub mod action;
pub use action::*;

pub mod choice;
pub use choice::*;

pub mod game;
pub use game::*;

pub mod legal;
pub use legal::*;

pub mod policy;
pub use policy::*;

pub mod registry;
pub use registry::*;

pub mod sizing;
pub use sizing::*;

pub mod state;
pub use state::*;

pub mod turn;
pub use turn::*;
