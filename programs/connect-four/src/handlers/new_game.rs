use anchor_lang::prelude::*;

use crate::constants::GAME_SEED;
use crate::handlers::collect_stake;
use crate::state::{Game, GameState};

#[derive(Accounts)]
#[instruction(reference: Pubkey)]
pub struct NewGame<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,

    // `init` rejects a reused reference: the derived address is already in
    // use, so account creation fails before any game logic runs.
    #[account(
        init,
        payer = signer,
        space = Game::DISCRIMINATOR.len() + Game::INIT_SPACE,
        seeds = [GAME_SEED, reference.as_ref()],
        bump
    )]
    pub game: Account<'info, Game>,
}

// Handle the new game instruction by:
// 1. Locking the creator's stake in the freshly created game account
// 2. Writing the initial record: empty board, no second player, creator first
pub fn new_game(context: Context<NewGame>, reference: Pubkey, stake: u64) -> Result<()> {
    let prize = Game::prize_for_stake(stake)?;

    collect_stake(
        &context.accounts.signer,
        &context.accounts.game.to_account_info(),
        stake,
        &context.accounts.system_program,
    )?;

    let bump = context.bumps.game;
    context.accounts.game.set_inner(Game {
        reference,
        player0: context.accounts.signer.key(),
        player1: None,
        winner: None,
        board: [[None; Game::COLS]; Game::ROWS],
        state: GameState::NotStarted,
        prize,
        turn: 0,
        bump,
    });

    Ok(())
}
