use crate::Chips;
use crate::Utility;
use crate::cards::Hand;
use crate::cards::Strength;

/// ephemeral data structure that splits the pot into side pots by
/// contribution level and pays each one to the best hands eligible for it.
/// folded players carry no strength and only ever feed pots.
pub struct Showdown {
    spent: Vec<Chips>,
    strengths: Vec<Option<Strength>>,
}

impl From<(&[Chips], &[bool], &[Hand], Hand)> for Showdown {
    fn from((spent, folded, holes, board): (&[Chips], &[bool], &[Hand], Hand)) -> Self {
        assert!(spent.len() == folded.len() && spent.len() == holes.len());
        Self {
            spent: spent.to_vec(),
            strengths: folded
                .iter()
                .zip(holes.iter())
                .map(|(f, h)| (!f).then(|| Strength::from(Hand::add(*h, board))))
                .collect(),
        }
    }
}

impl Showdown {
    /// net result of one player
    pub fn value(&self, player: usize) -> Utility {
        self.payouts()[player] - self.spent[player] as Utility
    }

    /// gross winnings of every player
    pub fn payouts(&self) -> Vec<Utility> {
        let mut payouts = vec![0.; self.spent.len()];
        let mut levels = self.spent.clone();
        levels.sort_unstable();
        levels.dedup();
        let mut prev = 0;
        for next in levels.into_iter().filter(|l| *l > 0) {
            let pot = self
                .spent
                .iter()
                .map(|s| *s.min(&next) as i64 - *s.min(&prev) as i64)
                .sum::<i64>();
            let winners = self.winners(next);
            let share = pot as Utility / winners.len() as Utility;
            for w in winners {
                payouts[w] += share;
            }
            prev = next;
        }
        payouts
    }

    /// best live hands that put in at least `level`. a pot that no live
    /// player reached falls to the deepest live contributors.
    fn winners(&self, level: Chips) -> Vec<usize> {
        let live = || (0..self.spent.len()).filter(|p| self.strengths[*p].is_some());
        let deepest = live().map(|p| self.spent[p]).max().expect("a live player at showdown");
        let eligible = live()
            .filter(|p| self.spent[*p] >= level.min(deepest))
            .collect::<Vec<_>>();
        let best = eligible
            .iter()
            .map(|p| self.strengths[*p])
            .max()
            .flatten();
        eligible
            .into_iter()
            .filter(|p| self.strengths[*p] == best)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn best_hand_takes_pot() {
        let holes = [hand("As Ah"), hand("Kd Kc")];
        let board = hand("2c 7d 9h Js 3s");
        let showdown = Showdown::from((&[500, 500][..], &[false, false][..], &holes[..], board));
        assert!(showdown.value(0) == 500.);
        assert!(showdown.value(1) == -500.);
    }

    #[test]
    fn chop_splits_evenly() {
        let holes = [hand("As 4h"), hand("Ad 4c"), hand("2d 3c")];
        let board = hand("Kc Qd Jh 9s 8s");
        let showdown = Showdown::from((&[300, 300, 300][..], &[false, false, true][..], &holes[..], board));
        assert!(showdown.value(0) == 150.);
        assert!(showdown.value(1) == 150.);
        assert!(showdown.payouts()[2] == 0.);
    }

    #[test]
    fn deep_pots_sum_past_chip_range() {
        let holes = [hand("As Ah"), hand("Kd Kc")];
        let board = hand("2c 7d 9h Js 3s");
        let spent = [Chips::MAX, Chips::MAX];
        let showdown = Showdown::from((&spent[..], &[false, false][..], &holes[..], board));
        assert!(showdown.payouts()[0] == 2. * Chips::MAX as Utility);
        assert!(showdown.value(0) + showdown.value(1) == 0.);
    }

    #[test]
    fn short_stack_wins_main_pot_only() {
        let holes = [hand("As Ah"), hand("Kd Kc"), hand("Qd Qc")];
        let board = hand("2c 7d 9h Js 3s");
        let spent = [100, 400, 400];
        let showdown = Showdown::from((&spent[..], &[false, false, false][..], &holes[..], board));
        assert!(showdown.value(0) == 200.);
        assert!(showdown.value(1) == 200.);
        assert!(showdown.value(2) == -400.);
        assert!((0..3).map(|p| showdown.value(p)).sum::<Utility>() == 0.);
    }
}
