use anchor_lang::prelude::*;

use crate::constants::GAME_SEED;
use crate::handlers::collect_stake;
use crate::state::Game;

#[derive(Accounts)]
pub struct JoinGame<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.reference.as_ref()],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,
}

// Handle the join game instruction by:
// 1. Seating the joiner as player1 and starting the game
// 2. Locking the joiner's matching stake, completing the prize pot
pub fn join_game(context: Context<JoinGame>) -> Result<()> {
    let joiner = context.accounts.signer.key();
    context.accounts.game.join(joiner)?;

    let stake = context.accounts.game.stake();
    collect_stake(
        &context.accounts.signer,
        &context.accounts.game.to_account_info(),
        stake,
        &context.accounts.system_program,
    )
}
