use crate::Score;

/// A round's outcome from one player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Won,
    Lost,
    Tie,
}

impl Verdict {
    /// Points added to the player's score.
    pub fn points(&self) -> Score {
        match self {
            Self::Won => 1,
            Self::Lost | Self::Tie => 0,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Won => write!(f, "I won!"),
            Self::Lost => write!(f, "I lost."),
            Self::Tie => write!(f, "Tie."),
        }
    }
}
