use anchor_lang::prelude::*;

use crate::constants::GAME_SEED;
use crate::error::ErrorCode;
use crate::state::Game;

#[derive(Accounts)]
pub struct CancelGame<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // Closing the account refunds the escrowed stake together with the rent,
    // all back to the creator.
    #[account(
        mut,
        constraint = game.player0 == signer.key() @ ErrorCode::InvalidPlayer,
        seeds = [GAME_SEED, game.reference.as_ref()],
        bump = game.bump,
        close = signer,
    )]
    pub game: Account<'info, Game>,
}

// A game can only be cancelled while nobody has joined it.
pub fn cancel_game(context: Context<CancelGame>) -> Result<()> {
    context.accounts.game.ensure_cancellable()?;
    Ok(())
}
