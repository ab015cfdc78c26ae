pub use self::{board::*, edge::*, player::*};

pub(crate) mod board;
pub(crate) mod edge;
pub(crate) mod grid;
pub(crate) mod player;
