use crate::rules::*;

/// Trait for entities that pick moves.
/// Implementations can be seeded random draws, fixed scripts, etc.
///
/// The actor owns the score and the console output; a Player only
/// decides what to throw and may learn from how each round went.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Pick a move for the current round.
    async fn decide(&mut self) -> Move;

    /// Receive this player's verdict for the round just played.
    async fn notify(&mut self, verdict: &Verdict);
}
