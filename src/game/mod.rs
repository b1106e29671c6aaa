//! A poker game: blinds while it runs, a ledger entry when it ends.
mod game;
mod session;

pub use game::*;
pub use session::*;
