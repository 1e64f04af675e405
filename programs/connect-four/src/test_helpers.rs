use anchor_lang::prelude::Pubkey;

use crate::error::ErrorCode;
use crate::state::{Game, GameState, MoveOutcome};

/// Default stake used across tests, in lamports.
pub const STAKE: u64 = 1_000_000_000;

/// A freshly created game record, exactly as the new game handler writes it.
pub fn fresh_game(creator: Pubkey, stake: u64) -> Game {
    Game {
        reference: Pubkey::new_unique(),
        player0: creator,
        player1: None,
        winner: None,
        board: [[None; Game::COLS]; Game::ROWS],
        state: GameState::NotStarted,
        prize: Game::prize_for_stake(stake).expect("valid test stake"),
        turn: 0,
        bump: 254,
    }
}

/// An in-progress match with both seats taken, standing in for the on-ledger
/// record so the state machine can be driven directly.
pub struct TestMatch {
    pub game: Game,
    pub creator: Pubkey,
    pub joiner: Pubkey,
}

pub fn setup_match() -> TestMatch {
    let creator = Pubkey::new_unique();
    let joiner = Pubkey::new_unique();
    let mut game = fresh_game(creator, STAKE);
    game.join(joiner).expect("joiner should be seated");
    TestMatch {
        game,
        creator,
        joiner,
    }
}

impl TestMatch {
    /// The wallet whose turn it is, paired with its opponent.
    pub fn mover(&self) -> (Pubkey, Pubkey) {
        if self.game.turn == 0 {
            (self.creator, self.joiner)
        } else {
            (self.joiner, self.creator)
        }
    }

    /// Plays one column as whoever is to move.
    pub fn play(&mut self, column: u8) -> Result<MoveOutcome, ErrorCode> {
        let (mover, opponent) = self.mover();
        self.game.drop_piece(&mover, &opponent, column)
    }

    /// Plays a scripted sequence, asserting every move is accepted, and
    /// returns the outcome of the last one.
    pub fn play_all(&mut self, columns: &[u8]) -> MoveOutcome {
        let mut outcome = MoveOutcome::Continue;
        for (ply, &column) in columns.iter().enumerate() {
            outcome = self.play(column).unwrap_or_else(|code| {
                panic!("move {} into column {} rejected: {:?}", ply, column, code)
            });
        }
        outcome
    }
}

/// Exhaustive four-in-a-row scan over the whole board, used as the oracle the
/// incremental detector is checked against.
pub fn full_scan_winner(game: &Game) -> Option<u8> {
    let steps = [(1i8, 0i8), (0, 1), (1, 1), (1, -1)];
    for row in 0..Game::ROWS {
        for col in 0..Game::COLS {
            let Some(owner) = game.board[row][col] else {
                continue;
            };
            for (row_step, col_step) in steps {
                let end_row = row as i8 + row_step * 3;
                let end_col = col as i8 + col_step * 3;
                if !(0..Game::ROWS as i8).contains(&end_row)
                    || !(0..Game::COLS as i8).contains(&end_col)
                {
                    continue;
                }
                if (1..4).all(|i| {
                    game.board[(row as i8 + row_step * i) as usize]
                        [(col as i8 + col_step * i) as usize]
                        == Some(owner)
                }) {
                    return Some(owner);
                }
            }
        }
    }
    None
}

/// Asserts that every column's pieces form a contiguous block resting on the
/// bottom row.
pub fn assert_gravity(game: &Game) {
    for col in 0..Game::COLS {
        for row in 0..Game::ROWS - 1 {
            if game.board[row][col].is_some() {
                assert!(
                    game.board[row + 1][col].is_some(),
                    "piece at ({}, {}) is floating",
                    row,
                    col
                );
            }
        }
    }
}
