//! Shared utilities for CLI commands.

use std::time::Duration;

use gametree::alpha_beta_searcher::SearchConfig;
use gametree::game::{GameLoop, Player};
use log::error;

pub(crate) fn create_config(depth: u8, quiescence_depth: u8, time_limit: f64) -> SearchConfig {
    match SearchConfig::new(depth, quiescence_depth).with_time_limit_secs(time_limit) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

pub(crate) fn run_game_loop(x: Player, o: Player, delay: Option<Duration>) {
    let mut game = GameLoop::new(x, o).with_delay(delay);
    if let Err(e) = game.run() {
        error!("game aborted: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
