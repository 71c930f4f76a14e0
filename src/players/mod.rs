//! Concrete [`Player`](crate::Player) implementations.
mod random;
mod scripted;

pub use random::*;
pub use scripted::*;
