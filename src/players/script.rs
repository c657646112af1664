use super::opponent::Decision;
use super::opponent::Opponent;
use crate::Error;
use crate::Result;
use crate::gameplay::State;
use std::collections::VecDeque;

/// Plays a fixed list of decisions in order.
#[derive(Debug, Default, Clone)]
pub struct Script(VecDeque<Decision>);

impl From<Vec<Decision>> for Script {
    fn from(decisions: Vec<Decision>) -> Self {
        Self(decisions.into())
    }
}

impl Opponent for Script {
    fn decide(&mut self, state: &State) -> Result<Decision> {
        self.0
            .pop_front()
            .ok_or_else(|| Error::Opponent(format!("script ran out at {}", state.sequence())))
    }
}
