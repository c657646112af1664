use super::opponent::Decision;
use super::opponent::Opponent;
use crate::Chips;
use crate::Error;
use crate::Result;
use crate::gameplay::Choice;
use crate::gameplay::Game;
use crate::gameplay::State;
use crate::gameplay::Turn;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;
use std::sync::Arc;

/// Drives a hand from the point of view of one learning agent.
///
/// Every transition is followed by a pass that samples chance nodes
/// and asks the opponent to act, so the agent only ever sees its own
/// decision nodes and terminal nodes.
pub struct Autoplay {
    agent: usize,
    rng: SmallRng,
    opponent: Box<dyn Opponent>,
}

impl Autoplay {
    pub fn new(agent: usize, seed: u64, opponent: Box<dyn Opponent>) -> Self {
        Self {
            agent,
            rng: SmallRng::seed_from_u64(seed),
            opponent,
        }
    }
    pub fn agent(&self) -> usize {
        self.agent
    }

    /// a fresh hand, advanced to the agent's first decision
    pub fn root(&mut self, game: &Arc<Game>) -> Result<State> {
        let mut state = game.new_initial_state();
        self.pass(&mut state)?;
        Ok(state)
    }
    /// apply the agent's action, then advance to its next decision
    pub fn child(&mut self, state: &State, action: i64) -> Result<State> {
        let mut child = state.child(action)?;
        self.pass(&mut child)?;
        Ok(child)
    }
    /// advance until the agent acts or the hand ends
    pub fn pass(&mut self, state: &mut State) -> Result<()> {
        loop {
            match state.turn() {
                Turn::Terminal => return Ok(()),
                Turn::Choice(seat) if seat == self.agent => return Ok(()),
                Turn::Chance => {
                    let card = self.sample(state);
                    state.apply(card)?;
                }
                Turn::Choice(seat) => {
                    let decision = self.opponent.decide(state)?;
                    log::debug!("seat {} decides {}", seat, decision);
                    Self::play(state, decision)?;
                }
            }
        }
    }

    /// a concrete raise equal to the stack is an all-in, any other raise
    /// in bounds becomes this information state's off-abstraction raise
    pub fn play(state: &mut State, decision: Decision) -> Result<()> {
        match decision {
            Decision::Choose(choice) => state.apply(i64::from(choice)),
            Decision::Raise(amount) => {
                let (min, max) = state.raise_bounds().ok_or(Error::RaiseOutOfRange {
                    amount,
                    min: 0,
                    max: 0,
                })?;
                if amount == max {
                    state.apply(i64::from(Self::shove(state, max)))
                } else if (min..max).contains(&amount) {
                    state.register_raise(amount)?;
                    state.apply(i64::from(Choice::OffAbs))
                } else {
                    Err(Error::RaiseOutOfRange { amount, min, max })
                }
            }
        }
    }

    /// all-in, or the pot bet when the pot already covers the stack
    fn shove(state: &State, max: Chips) -> Choice {
        match state.legal().contains(&Choice::AllIn) {
            true => Choice::AllIn,
            false => state
                .legal()
                .choices()
                .filter(|c| c.is_raise())
                .find(|c| state.sizing().amount(*c) == max)
                .unwrap_or(Choice::AllIn),
        }
    }

    fn sample(&mut self, state: &State) -> i64 {
        let outcomes = state.chance_outcomes();
        let weights = outcomes.iter().map(|(_, p)| *p);
        let index = WeightedIndex::new(weights).expect("chance nodes have outcomes");
        outcomes[index.sample(&mut self.rng)].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Policy;
    use crate::players::Random;
    use crate::players::Script;
    use crate::rules::Gamedef;

    const HOLDEM: &str = "GAMEDEF\nnolimit\nnumPlayers = 2\nnumRounds = 4\nstack = 20000 20000\nblind = 100 50\nfirstPlayer = 2 1 1 1\nnumSuits = 4\nnumRanks = 13\nnumHoleCards = 2\nnumBoardCards = 0 3 1 1\nEND GAMEDEF\n";

    fn holdem() -> Arc<Game> {
        Arc::new(Game::new(Gamedef::try_from(HOLDEM).unwrap(), Policy::FCPA))
    }

    #[test]
    fn root_stops_at_agent() {
        let game = holdem();
        for agent in 0..2 {
            let mut autoplay = Autoplay::new(agent, 3, Box::new(Random::from(5)));
            let state = autoplay.root(&game).unwrap();
            assert!(state.is_terminal() || state.turn() == Turn::Choice(agent));
        }
    }

    #[test]
    fn hands_reach_terminal() {
        let game = holdem();
        let mut autoplay = Autoplay::new(0, 9, Box::new(Random::from(1)));
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..50 {
            let mut state = autoplay.root(&game).unwrap();
            while !state.is_terminal() {
                assert!(state.turn() == Turn::Choice(0));
                let actions = state.legal_actions();
                let action = actions[rand::Rng::random_range(&mut rng, 0..actions.len())];
                state = autoplay.child(&state, action).unwrap();
            }
            assert!(state.returns().iter().sum::<f64>().abs() < 1e-9);
        }
    }

    #[test]
    fn custom_raise_goes_off_abstraction() {
        let script = Script::from(vec![Decision::Raise(750)]);
        let mut autoplay = Autoplay::new(0, 4, Box::new(script));
        let state = autoplay.root(&holdem()).unwrap();
        assert!(state.turn() == Turn::Choice(0));
        assert!(state.engine().max_spend() == 750);
        assert!(state.engine().betting_sequence(0) == "r750");
        assert!(state.sequence().ends_with('b'));
    }

    #[test]
    fn stack_sized_raise_is_all_in() {
        let script = Script::from(vec![Decision::Raise(20000)]);
        let mut autoplay = Autoplay::new(0, 4, Box::new(script));
        let state = autoplay.root(&holdem()).unwrap();
        assert!(state.sequence().ends_with('a'));
        assert!(state.engine().max_spend() == 20000);
    }

    #[test]
    fn undersized_raise_rejected() {
        let script = Script::from(vec![Decision::Raise(150)]);
        let mut autoplay = Autoplay::new(0, 4, Box::new(script));
        let result = autoplay.root(&holdem());
        assert!(matches!(
            result,
            Err(Error::RaiseOutOfRange {
                amount: 150,
                min: 200,
                max: 20000
            })
        ));
    }

    #[test]
    fn exhausted_script_reports_opponent() {
        let mut autoplay = Autoplay::new(0, 4, Box::new(Script::default()));
        assert!(matches!(autoplay.root(&holdem()), Err(Error::Opponent(_))));
    }
}
