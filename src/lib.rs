pub mod alpha_beta_searcher;
pub mod game;
pub mod games;
pub mod input_handler;
pub mod prelude;
