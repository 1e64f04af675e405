use anchor_lang::prelude::*;
use anchor_lang::system_program;

// Escrow a player's stake into the game account. Deposits come from system-
// owned wallets, so they go through a system program CPI.
pub fn collect_stake<'info>(
    from: &Signer<'info>,
    game: &AccountInfo<'info>,
    amount: u64,
    system_program: &Program<'info, System>,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: from.to_account_info(),
                to: game.clone(),
            },
        ),
        amount,
    )
}

// Release escrowed lamports. The game account carries data owned by this
// program, so the system program cannot debit it; balances are adjusted
// directly instead.
pub fn payout<'info>(
    from: &impl Lamports<'info>,
    to: &impl Lamports<'info>,
    amount: u64,
) -> Result<()> {
    from.sub_lamports(amount)?;
    to.add_lamports(amount)?;
    Ok(())
}
