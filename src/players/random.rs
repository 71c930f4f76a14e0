use crate::gameroom::*;
use crate::rules::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU player that throws uniformly at random.
/// Owns its random stream, so no source is ever shared between seats.
pub struct Random {
    rng: SmallRng,
}

impl Random {
    /// Seeded from the clock, mixed with the seat so that two players
    /// started in the same instant still draw independently.
    pub fn new(seat: Seat) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::seeded(nanos, seat)
    }
    /// Deterministic stream for a given seed and seat.
    pub fn seeded(seed: u64, seat: Seat) -> Self {
        let seed = seed ^ (seat.index() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn draw(&mut self) -> Move {
        match self.rng.random_range(0..3) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}

#[async_trait::async_trait]
impl Player for Random {
    async fn decide(&mut self) -> Move {
        self.draw()
    }
    async fn notify(&mut self, _: &Verdict) {}
}
