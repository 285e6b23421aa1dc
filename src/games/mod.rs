//! Reference games that plug into the alpha-beta searcher.

pub mod nim;
pub mod ultimate_tic_tac_toe;
