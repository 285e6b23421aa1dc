//! Nim command - print the best number of objects to take from a pile.

use gametree::alpha_beta_searcher::{SearchContext, NEG_INFINITY, POS_INFINITY};
use gametree::games::nim::best_take;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct NimArgs {
    #[structopt(short, long)]
    pub pile: u32,
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
}

impl Command for NimArgs {
    fn execute(self) {
        let mut context = SearchContext::new(create_config(self.depth, 0, 0.0));

        match best_take(&mut context, self.pile) {
            Ok(result) => {
                let verdict = match result.score {
                    POS_INFINITY => "forced win",
                    NEG_INFINITY => "forced loss",
                    score if score > 0 => "winning",
                    _ => "losing",
                };
                println!("take {} ({})", result.best_move.take, verdict);
                println!(
                    "* Positions searched: {} (depth: {})\n* Move took: {:?}",
                    result.stats.total_nodes(),
                    self.depth,
                    result.duration
                );
            }
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
