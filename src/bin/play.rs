//! Interactive Binary
//!
//! Play abstracted poker in the terminal against a random bot.
//! Game options mirror the parameter names, plus --holdem and --json.

use abstracted_poker::gameplay::Game;
use abstracted_poker::params::Params;
use abstracted_poker::players::Autoplay;
use abstracted_poker::players::Decision;
use abstracted_poker::players::Human;
use abstracted_poker::players::Opponent;
use abstracted_poker::players::Random;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(about = "play abstracted poker against a random bot")]
struct Args {
    #[command(flatten)]
    params: Params,
    /// heads-up no-limit hold'em, keeps only --betting-abstraction
    #[arg(long)]
    holdem: bool,
    /// read game options from a json file instead of flags
    #[arg(long, conflicts_with = "holdem")]
    json: Option<PathBuf>,
    /// seat played by the bot, every other seat is yours
    #[arg(long, default_value_t = 1)]
    bot: usize,
    #[arg(long, default_value_t = 1)]
    hands: usize,
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn params(&self) -> anyhow::Result<Params> {
        match (self.holdem, &self.json) {
            (true, _) => Ok(Params {
                betting_abstraction: self.params.betting_abstraction.clone().or(Some("fcpa".to_string())),
                ..Params::holdem()
            }),
            (false, Some(path)) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
            (false, None) => Ok(self.params.clone()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    abstracted_poker::log();
    let args = Args::parse();
    let game = Arc::new(Game::try_from(args.params()?)?);
    anyhow::ensure!(args.bot < game.num_players(), "no seat {} in a {} player game", args.bot, game.num_players());
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);
    let mut bot = Random::from(seed);
    let mut autoplay = Autoplay::new(args.bot, seed, Box::new(Human));
    let mut totals = vec![0.; game.num_players()];
    for hand in 0..args.hands {
        log::info!("hand {}", hand + 1);
        let mut state = autoplay.root(&game)?;
        while !state.is_terminal() {
            let action = match bot.decide(&state)? {
                Decision::Choose(choice) => i64::from(choice),
                Decision::Raise(_) => unreachable!("random bot only picks abstract choices"),
            };
            log::info!("{}", state.action_to_string(state.current_player(), action)?);
            state = autoplay.child(&state, action)?;
        }
        println!("{}", state);
        for (total, reward) in totals.iter_mut().zip(state.returns()) {
            *total += reward;
        }
    }
    log::info!("totals after {} hands: {:?}", args.hands, totals);
    Ok(())
}
