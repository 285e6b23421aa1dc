//! Reading and parsing human input for the terminal front end.

mod input;

pub use input::{parse_move_input, read_move_input, InputError, MoveInput};
