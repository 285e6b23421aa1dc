//! Play command - play a game against the computer.

use gametree::game::Player;
use gametree::games::ultimate_tic_tac_toe::Mark;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
    #[structopt(short = "q", long = "quiescence-depth", default_value = "3")]
    pub quiescence_depth: u8,
    #[structopt(
        short = "t",
        long = "time-limit",
        default_value = "0",
        help = "Seconds per engine move, 0 for no limit"
    )]
    pub time_limit: f64,
    #[structopt(long = "human", default_value = "x", help = "The mark you play, x or o")]
    pub human: Mark,
    #[structopt(long, help = "Shuffle engine moves with this seed")]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.quiescence_depth, self.time_limit);
        let engine = Player::engine(config, self.seed);
        let (x, o) = match self.human {
            Mark::X => (Player::Human, engine),
            Mark::O => (engine, Player::Human),
        };
        run_game_loop(x, o, None);
    }
}
