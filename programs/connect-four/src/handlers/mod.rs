pub mod new_game;
pub use new_game::*;

pub mod join_game;
pub use join_game::*;

pub mod play;
pub use play::*;

pub mod cancel_game;
pub use cancel_game::*;

pub mod shared;
pub use shared::*;
