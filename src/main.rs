mod cli;

use cli::commands::Command;
use cli::GameTree;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    GameTree::from_args().execute();
}
