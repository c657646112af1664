use super::opponent::Decision;
use super::opponent::Opponent;
use crate::Error;
use crate::Result;
use crate::gameplay::Choice;
use crate::gameplay::State;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Uniformly random over the legal choices.
#[derive(Debug)]
pub struct Random(SmallRng);

impl From<u64> for Random {
    fn from(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Opponent for Random {
    fn decide(&mut self, state: &State) -> Result<Decision> {
        let choices = state.legal().choices().collect::<Vec<Choice>>();
        match choices.len() {
            0 => Err(Error::Opponent(format!("no legal choices at {}", state.turn()))),
            n => Ok(Decision::Choose(choices[self.0.random_range(0..n)])),
        }
    }
}
