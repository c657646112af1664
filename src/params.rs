use crate::Error;
use crate::Result;
use crate::gameplay::Game;
use crate::gameplay::Policy;
use crate::rules::Betting;
use crate::rules::Gamedef;
use serde::Deserialize;
use serde::Serialize;

/// Game configuration, one optional field per recognized option.
///
/// Either a complete `gamedef` text, or the individual options it is
/// generated from. Unset options fall back to a small two-round
/// no-limit game. The betting abstraction is not part of a gamedef and
/// may accompany either form. List-valued options are space separated
/// per player or per round, as in `"1200 1200"`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Params {
    /// full game definition text, exclusive with the options below
    #[cfg_attr(feature = "cli", arg(long))]
    pub gamedef: Option<String>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub num_players: Option<usize>,
    /// limit or nolimit
    #[cfg_attr(feature = "cli", arg(long))]
    pub betting: Option<String>,
    /// starting stack per player, no-limit only
    #[cfg_attr(feature = "cli", arg(long))]
    pub stack: Option<String>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub blind: Option<String>,
    /// fixed raise per round, limit only
    #[cfg_attr(feature = "cli", arg(long))]
    pub raise_size: Option<String>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub num_rounds: Option<usize>,
    /// 1-based seat to act first, per round
    #[cfg_attr(feature = "cli", arg(long))]
    pub first_player: Option<String>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub max_raises: Option<String>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub num_suits: Option<usize>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub num_ranks: Option<usize>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub num_hole_cards: Option<usize>,
    #[cfg_attr(feature = "cli", arg(long))]
    pub num_board_cards: Option<String>,
    /// fc or fcpa
    #[cfg_attr(feature = "cli", arg(long))]
    pub betting_abstraction: Option<String>,
}

impl Params {
    /// heads-up no-limit hold'em with 200 big blinds
    pub fn holdem() -> Self {
        Self {
            betting: Some("nolimit".to_string()),
            num_players: Some(2),
            num_rounds: Some(4),
            stack: Some("20000 20000".to_string()),
            blind: Some("100 50".to_string()),
            first_player: Some("2 1 1 1".to_string()),
            num_suits: Some(4),
            num_ranks: Some(13),
            num_hole_cards: Some(2),
            num_board_cards: Some("0 3 1 1".to_string()),
            betting_abstraction: Some("fcpa".to_string()),
            ..Self::default()
        }
    }

    pub fn policy(&self) -> Result<Policy> {
        Policy::try_from(self.betting_abstraction.as_deref().unwrap_or("fcpa"))
    }

    /// the given gamedef, or one generated from the options
    pub fn gamedef(&self) -> Result<Gamedef> {
        match &self.gamedef {
            Some(text) => match self.options().is_empty() {
                true => Gamedef::try_from(text.as_str()),
                false => Err(Error::Config(format!(
                    "gamedef is exclusive with {}",
                    self.options().join(", ")
                ))),
            },
            None => Gamedef::try_from(self.generate()?.as_str()),
        }
    }

    /// names of the gamedef-generating options that are set
    fn options(&self) -> Vec<&'static str> {
        [
            ("numPlayers", self.num_players.is_some()),
            ("betting", self.betting.is_some()),
            ("stack", self.stack.is_some()),
            ("blind", self.blind.is_some()),
            ("raiseSize", self.raise_size.is_some()),
            ("numRounds", self.num_rounds.is_some()),
            ("firstPlayer", self.first_player.is_some()),
            ("maxRaises", self.max_raises.is_some()),
            ("numSuits", self.num_suits.is_some()),
            ("numRanks", self.num_ranks.is_some()),
            ("numHoleCards", self.num_hole_cards.is_some()),
            ("numBoardCards", self.num_board_cards.is_some()),
        ]
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect()
    }

    fn generate(&self) -> Result<String> {
        let betting = Betting::try_from(self.betting.as_deref().unwrap_or("nolimit")).map_err(Error::Config)?;
        let mut text = String::from("GAMEDEF\n");
        text.push_str(&format!("{}\n", betting));
        text.push_str(&format!("numPlayers = {}\n", self.num_players.unwrap_or(2)));
        text.push_str(&format!("numRounds = {}\n", self.num_rounds.unwrap_or(2)));
        text.push_str(&format!("numSuits = {}\n", self.num_suits.unwrap_or(4)));
        text.push_str(&format!("firstPlayer = {}\n", self.first_player.as_deref().unwrap_or("1 1")));
        text.push_str(&format!("numRanks = {}\n", self.num_ranks.unwrap_or(6)));
        text.push_str(&format!("numHoleCards = {}\n", self.num_hole_cards.unwrap_or(1)));
        text.push_str(&format!("numBoardCards = {}\n", self.num_board_cards.as_deref().unwrap_or("0 1")));
        if let Some(limits) = self.max_raises.as_deref() {
            text.push_str(&format!("maxRaises = {}\n", limits));
        }
        match betting {
            Betting::Limit => text.push_str(&format!("raiseSize = {}\n", self.raise_size.as_deref().unwrap_or("100 100"))),
            Betting::NoLimit => text.push_str(&format!("stack = {}\n", self.stack.as_deref().unwrap_or("1200 1200"))),
        }
        text.push_str(&format!("blind = {}\n", self.blind.as_deref().unwrap_or("100 100")));
        text.push_str("END GAMEDEF\n");
        log::debug!("generated gamedef\n{}", text);
        Ok(text)
    }
}

impl TryFrom<Params> for Game {
    type Error = Error;
    fn try_from(params: Params) -> Result<Self> {
        Ok(Game::new(params.gamedef()?, params.policy()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;

    #[test]
    fn defaults_make_a_small_game() {
        let gamedef = Params::default().gamedef().unwrap();
        assert!(!gamedef.is_limit());
        assert!(gamedef.players() == 2);
        assert!(gamedef.rounds() == 2);
        assert!(gamedef.stack(1) == 1200);
        assert!(gamedef.blind(0) == 100);
        assert!(gamedef.deck_size() == 24);
        assert!(gamedef.hole_cards() == 1);
        assert!(gamedef.total_board_cards() == 1);
        assert!(gamedef.max_raises(0) == crate::MAX_RAISES);
        assert!(Params::default().policy().unwrap() == Policy::FCPA);
    }

    #[test]
    fn limit_ignores_stacks() {
        let params = Params {
            betting: Some("limit".to_string()),
            stack: Some("5 5".to_string()),
            max_raises: Some("3 4".to_string()),
            ..Params::default()
        };
        let gamedef = params.gamedef().unwrap();
        assert!(gamedef.is_limit());
        assert!(gamedef.stack(0) == Chips::MAX);
        assert!(gamedef.raise_size(1) == 100);
        assert!(gamedef.max_raises(1) == 4);
    }

    #[test]
    fn holdem_preset() {
        let game = Game::try_from(Params::holdem()).unwrap();
        assert!(game.num_players() == 2);
        assert!(game.max_chance_outcomes() == 52);
        assert!(game.gamedef().board_cards_required(3) == 5);
        assert!(game.gamedef().first_player(0) == 1);
    }

    #[test]
    fn gamedef_is_exclusive() {
        let text = Params::holdem().gamedef().unwrap().to_string();
        let alone = Params {
            gamedef: Some(text.clone()),
            betting_abstraction: Some("fc".to_string()),
            ..Params::default()
        };
        assert!(alone.gamedef().unwrap() == Params::holdem().gamedef().unwrap());
        assert!(alone.policy().unwrap() == Policy::FC);
        let both = Params {
            gamedef: Some(text),
            num_players: Some(3),
            ..Params::default()
        };
        assert!(matches!(both.gamedef(), Err(Error::Config(_))));
    }

    #[test]
    fn bad_options_are_config_errors() {
        let betting = Params {
            betting: Some("potlimit".to_string()),
            ..Params::default()
        };
        assert!(matches!(betting.gamedef(), Err(Error::Config(_))));
        let policy = Params {
            betting_abstraction: Some("fchpa".to_string()),
            ..Params::default()
        };
        assert!(matches!(Game::try_from(policy), Err(Error::Config(_))));
    }

    #[test]
    fn json_uses_option_names() {
        let params = serde_json::from_str::<Params>(r#"{"numPlayers": 3, "blind": "1 2 0", "stack": "50 50 50"}"#).unwrap();
        assert!(params.num_players == Some(3));
        let gamedef = params.gamedef().unwrap();
        assert!(gamedef.players() == 3);
        assert!(gamedef.blind(1) == 2);
        assert!(serde_json::from_str::<Params>(r#"{"bogus": 1}"#).is_err());
        let json = serde_json::to_string(&Params::holdem()).unwrap();
        assert!(serde_json::from_str::<Params>(&json).unwrap() == Params::holdem());
    }
}
