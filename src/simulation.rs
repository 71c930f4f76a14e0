//! Headless matches: same rules, no actors, no console, no pauses.
use crate::Round;
use crate::players::Random;
use crate::rules::*;

/// Two seeded random players adjudicated in a tight loop.
/// Identical seeds produce identical tallies.
pub struct Simulation {
    p1: Random,
    p2: Random,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self {
            p1: Random::seeded(seed, Seat::P1),
            p2: Random::seeded(seed, Seat::P2),
        }
    }
    pub fn round(&mut self) -> Outcome {
        Outcome::from((self.p1.draw(), self.p2.draw()))
    }
    pub fn play(&mut self, rounds: Round) -> Tally {
        let tally = (0..rounds).map(|_| self.round()).collect::<Tally>();
        log::debug!("[simulation] {}", tally);
        tally
    }
}
