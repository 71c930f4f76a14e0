//! Async runtime for a live match.
//!
//! ## Architecture
//!
//! - [`Room`] — Supervisor wiring links and spawning actors
//! - [`Referee`] — Actor driving rounds and adjudicating outcomes
//! - [`Actor`] — Async task wrapper for one player's turn loop
//! - [`link`] — Rendezvous channels between referee and players
//!
//! [`Player`] is the trait for pluggable move selection; [`Hangup`] says
//! why a hand-off did not complete.
mod actor;
mod channel;
mod hangup;
mod player;
mod referee;
mod room;

pub use actor::*;
pub use channel::*;
pub use hangup::*;
pub use player::*;
pub use referee::*;
pub use room::*;
