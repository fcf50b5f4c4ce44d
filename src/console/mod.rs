//! Console collaborators: text input for human players and board rendering.

mod input;
mod render;

pub use input::{ConsoleInput, LineInput, ScriptedInput, parse_move, retry_message};
pub use render::render_board;
