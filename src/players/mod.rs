pub mod autoplay;
pub use autoplay::*;

pub mod opponent;
pub use opponent::*;

pub mod random;
pub use random::*;

pub mod script;
pub use script::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;
