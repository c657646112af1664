//! Abstracted poker.
//!
//! An extensive-form, imperfect-information poker game-state machine with a
//! discrete bet-sizing abstraction. States deal cards, enumerate legal
//! abstract actions, apply them, and encode information states as strings and
//! fixed-size tensors for equilibrium solvers.
pub mod abstraction;
pub mod cards;
pub mod error;
pub mod gameplay;
pub mod params;
pub mod players;
pub mod rules;

pub use error::Error;
pub use error::Result;

/// Chip amounts. Every bet size is a raise-to total, never a raise-by.
pub type Chips = i32;
/// Net returns and payoffs.
pub type Utility = f64;
/// Chance outcome and sampling weights.
pub type Probability = f64;
/// Coarse information-abstraction bucket id.
pub type Bucket = i64;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Most players at a table.
pub const MAX_PLAYERS: usize = 10;
/// Most betting rounds in a hand.
pub const MAX_ROUNDS: usize = 4;
/// Most hole cards dealt to one player.
pub const MAX_HOLE_CARDS: usize = 3;
/// Most board cards across all rounds.
pub const MAX_BOARD_CARDS: usize = 7;
/// Default raise cap per round when a gamedef does not name one.
pub const MAX_RAISES: u8 = u8::MAX;
/// Bucket reported when no canonical hand index applies.
pub const NO_BUCKET: Bucket = -1;
/// Bucket count of the placeholder clustering oracle.
pub const MODULO_BUCKETS: u64 = 200;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
