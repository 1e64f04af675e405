pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use handlers::*;
pub use state::*;

#[cfg(test)]
mod test_helpers;

declare_id!("8jR5GeNzeweq35Uo84kGP3v1NcBaZWH5u62k7PxN4T2y");

#[program]
pub mod connect_four {
    use super::*;

    pub fn new_game(context: Context<NewGame>, reference: Pubkey, stake: u64) -> Result<()> {
        handlers::new_game::new_game(context, reference, stake)
    }

    pub fn join_game(context: Context<JoinGame>) -> Result<()> {
        handlers::join_game::join_game(context)
    }

    pub fn play(context: Context<Play>, column: u8) -> Result<()> {
        handlers::play::play(context, column)
    }

    pub fn cancel_game(context: Context<CancelGame>) -> Result<()> {
        handlers::cancel_game::cancel_game(context)
    }
}
