pub use self::{court::*, player::*, position::*, team::*};

pub(crate) mod court;
pub(crate) mod player;
pub(crate) mod position;
pub(crate) mod team;
