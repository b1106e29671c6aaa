mod player;
mod table;

pub use player::*;
pub use table::*;
