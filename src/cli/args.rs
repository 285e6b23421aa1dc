//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{nim::NimArgs, play::PlayArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "gametree",
    about = "Alpha-beta game-tree search, played out on ultimate tic-tac-toe and Nim"
)]
pub enum GameTree {
    #[structopt(
        name = "play",
        about = "Play ultimate tic-tac-toe against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 6). You play X unless you pass `--human o`. Enter moves as `row col`, both 0-8, or `quit` to leave."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play ultimate tic-tac-toe against itself at the given `--depth` (default: 6), pausing `--delay` milliseconds between moves."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "nim",
        about = "Find the best number of objects to take from a Nim pile of `--pile` objects, searching at the given `--depth` (default: 6)."
    )]
    Nim(NimArgs),
}

impl crate::cli::commands::Command for GameTree {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            Nim(cmd),
        }
    }
}
