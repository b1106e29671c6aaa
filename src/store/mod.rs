mod backend;
mod error;
mod file;
mod medium;
mod memory;

pub use backend::*;
pub use error::*;
pub use file::*;
pub use medium::*;
pub use memory::*;
