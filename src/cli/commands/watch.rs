//! Watch command - watch the computer play against itself.

use std::time::Duration;

use gametree::game::Player;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
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
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, help = "Shuffle engine moves with this seed")]
    pub seed: Option<u64>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.quiescence_depth, self.time_limit);
        // each side shuffles independently
        let x = Player::engine(config.clone(), self.seed);
        let o = Player::engine(config, self.seed.map(|seed| seed.wrapping_add(1)));
        run_game_loop(x, o, Some(Duration::from_millis(self.delay_ms)));
    }
}
