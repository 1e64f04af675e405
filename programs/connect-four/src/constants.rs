/// Seed prefix for the game PDA. The full seeds are
/// `["game", reference]` where `reference` is the creator-chosen id.
pub const GAME_SEED: &[u8] = b"game";
