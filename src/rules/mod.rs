//! The fixed rock-paper-scissors rule table.
//!
//! - [`Move`] — a single throw and the cyclic dominance relation
//! - [`Outcome`] — who won a round, from the referee's point of view
//! - [`Verdict`] — who won a round, from one player's point of view
//! - [`Seat`] — which of the two contestants
//! - [`Tally`] — win and tie counts over many rounds
mod moves;
mod outcome;
mod seat;
mod tally;
mod verdict;

pub use moves::*;
pub use outcome::*;
pub use seat::*;
pub use tally::*;
pub use verdict::*;
