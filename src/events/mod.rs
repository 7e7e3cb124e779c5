mod keyboard;
mod pointer;

pub use keyboard::*;
pub use pointer::*;
