use crate::Arbitrary;

/// A throw in rock-paper-scissors.
///
/// Dominance is cyclic: Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock. No move beats itself.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    /// Rock — beats Scissors, loses to Paper.
    Rock,
    /// Paper — beats Rock, loses to Scissors.
    Paper,
    /// Scissors — beats Paper, loses to Rock.
    Scissors,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// The move this one defeats.
    pub const fn prey(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.prey() == *other
    }
}

impl From<Move> for usize {
    fn from(m: Move) -> Self {
        match m {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        match rand::random_range(0..3) {
            0 => Self::Rock,
            1 => Self::Paper,
            _ => Self::Scissors,
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(format!("invalid move: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn cyclic_dominance() {
        assert!(Move::Rock.beats(&Move::Scissors));
        assert!(Move::Scissors.beats(&Move::Paper));
        assert!(Move::Paper.beats(&Move::Rock));
    }
    #[test]
    fn no_other_pair_wins() {
        let wins = Move::ALL
            .iter()
            .flat_map(|a| Move::ALL.iter().map(move |b| (a, b)))
            .filter(|(a, b)| a.beats(b))
            .count();
        assert_eq!(wins, 3);
    }
    #[test]
    fn nothing_beats_itself() {
        for m in Move::ALL {
            assert!(!m.beats(&m));
        }
    }
    #[test]
    fn parse_names_and_letters() {
        assert_eq!(Move::try_from("rock"), Ok(Move::Rock));
        assert_eq!(Move::try_from("P"), Ok(Move::Paper));
        assert_eq!(Move::try_from(" Scissors "), Ok(Move::Scissors));
        assert!(Move::try_from("lizard").is_err());
    }
    #[test]
    fn display_parses_back() {
        for m in Move::ALL {
            assert_eq!(Move::try_from(m.to_string().as_str()), Ok(m));
        }
    }
}
