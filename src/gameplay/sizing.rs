use super::choice::Choice;
use super::legal::Legal;
use super::policy::Policy;
use crate::Chips;
use crate::rules::Engine;

/// Legal choices of a decision node together with the raise-to
/// amount behind each raise-class choice.
///
/// All pot arithmetic happens in i64. Amounts that would not fit
/// in a chip count are never legal, so they saturate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    legal: Legal,
    amounts: [Chips; 8],
}

impl Sizing {
    pub fn none() -> Self {
        Self::default()
    }
    pub fn deal() -> Self {
        Self {
            legal: Legal::deal(),
            amounts: [0; 8],
        }
    }

    /// offers fold and call when the rules allow them, then under FCPA
    /// sizes each raise from the pot, defined as the live bet times the
    /// players still in. `registered` is asked only when an
    /// off-abstraction raise could be legal.
    pub fn resolve<F>(engine: &Engine, policy: Policy, registered: F) -> Self
    where
        F: FnOnce() -> Option<Chips>,
    {
        let mut sizing = Self::none();
        if engine.fold_is_valid() {
            sizing.legal.insert(Choice::Fold);
        }
        if engine.call_is_valid() {
            sizing.legal.insert(Choice::Call);
        }
        if policy == Policy::FC {
            return sizing;
        }
        let Some((min, max)) = engine.raise_bounds() else {
            return sizing;
        };
        if engine.gamedef().is_limit() {
            sizing.offer(Choice::Bet, min as i64, |to| to > 0);
            return sizing;
        }
        let (min, max) = (min as i64, max as i64);
        let live = engine.max_spend() as i64;
        let pot = live * (engine.gamedef().players() - engine.num_folded()) as i64;
        let bet = pot.max(min).min(max);
        let within = |to: i64| to >= min && to < max;
        sizing.offer(Choice::Bet, bet, |to| to > 0);
        sizing.offer(Choice::AllIn, max, |to| to > bet);
        sizing.offer(Choice::HalfPot, live + pot / 2, within);
        sizing.offer(Choice::OnePot, live + pot, within);
        sizing.offer(Choice::TwoPot, live + pot * 2, within);
        if let Some(raise) = registered() {
            sizing.offer(Choice::OffAbs, raise as i64, within);
        }
        sizing
    }

    fn offer<F>(&mut self, choice: Choice, to: i64, legal: F)
    where
        F: Fn(i64) -> bool,
    {
        self.amounts[choice as usize] = to.clamp(Chips::MIN as i64, Chips::MAX as i64) as Chips;
        if legal(to) {
            self.legal.insert(choice);
        }
    }

    pub fn legal(&self) -> Legal {
        self.legal
    }
    /// raise-to behind a choice, legal or not. zero for fold and call.
    pub fn amount(&self, choice: Choice) -> Chips {
        self.amounts[choice as usize]
    }
    /// raise-to amounts of the legal raise-class choices, in id order
    pub fn raises(&self) -> Vec<Chips> {
        self.legal
            .choices()
            .filter(|c| c.is_raise())
            .map(|c| self.amount(c))
            .collect()
    }
}
