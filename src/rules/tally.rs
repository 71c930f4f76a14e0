use super::*;

/// Win and tie counts over a run of rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    p1: u64,
    p2: u64,
    ties: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::P1 => self.p1 += 1,
            Outcome::P2 => self.p2 += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn wins(&self, seat: Seat) -> u64 {
        match seat {
            Seat::P1 => self.p1,
            Seat::P2 => self.p2,
        }
    }
    pub fn ties(&self) -> u64 {
        self.ties
    }
    /// Number of rounds recorded.
    pub fn total(&self) -> u64 {
        self.p1 + self.p2 + self.ties
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|o| tally.record(o));
        tally
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: {} {} wins, {} {} wins, {} ties",
            self.total(),
            Seat::P1,
            self.p1,
            Seat::P2,
            self.p2,
            self.ties
        )
    }
}
