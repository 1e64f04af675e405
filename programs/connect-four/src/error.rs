use anchor_lang::prelude::*;

// Codes are wire-stable: existing variants keep their position, new ones are
// appended at the end.
#[error_code]
pub enum ErrorCode {
    #[msg("Game started")]
    GameStarted,

    #[msg("Game is full")]
    GameFull,

    #[msg("Invalid player")]
    InvalidPlayer,

    #[msg("Game not started")]
    GameNotStarted,

    #[msg("Game in progress")]
    GameInProgress,

    #[msg("Game over")]
    GameOver,

    #[msg("Not your turn")]
    NotYourTurn,

    #[msg("Invalid row")]
    InvalidRow,

    #[msg("Invalid column")]
    InvalidColumn,

    #[msg("Cell is not empty")]
    CellNotEmpty,

    #[msg("Invalid stake amount")]
    InvalidStake,
}
