//! HTTP and WebSocket front of the league.
//!
//! - [`Server`] — actix-web server and its routes
//! - [`House`] — state shared by every route
//! - [`handlers`] — score, win, league, game page, and socket upgrade
//! - [`converse`] — the two-frame game protocol spoken over a socket
pub mod handlers;
mod house;
mod page;
mod server;
mod socket;

pub use house::*;
pub use page::*;
pub use server::*;
pub use socket::*;
