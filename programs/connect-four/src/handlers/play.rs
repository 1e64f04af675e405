use anchor_lang::prelude::*;

use crate::constants::GAME_SEED;
use crate::handlers::payout;
use crate::state::{Game, MoveOutcome};

#[derive(Accounts)]
pub struct Play<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    /// CHECK: validated in the handler against the game's stored players
    #[account(mut)]
    pub opponent: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.reference.as_ref()],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,
}

// Handle the play instruction by:
// 1. Validating and applying the move on the game record
// 2. Settling the escrow if the move ended the game
pub fn play(context: Context<Play>, column: u8) -> Result<()> {
    let mover = context.accounts.signer.key();
    let opponent = context.accounts.opponent.key();

    let outcome = context
        .accounts
        .game
        .drop_piece(&mover, &opponent, column)?;

    match outcome {
        MoveOutcome::Continue => Ok(()),
        MoveOutcome::Won => {
            let prize = context.accounts.game.prize;
            payout(&context.accounts.game, &context.accounts.signer, prize)
        }
        MoveOutcome::Draw => {
            // The mover can be either seat; the record routes each share to
            // the right wallet.
            let (signer_share, opponent_share) = context.accounts.game.draw_payout(&mover);

            payout(&context.accounts.game, &context.accounts.signer, signer_share)?;
            payout(
                &context.accounts.game,
                &context.accounts.opponent,
                opponent_share,
            )
        }
    }
}
