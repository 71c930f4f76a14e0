use super::*;

/// Result of a round, derived solely from the ordered pair of moves.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    P1,
    P2,
}

impl Outcome {
    /// Swap the winner, as if the players had traded seats.
    pub fn mirror(&self) -> Self {
        match self {
            Self::Tie => Self::Tie,
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::Tie => None,
            Self::P1 => Some(Seat::P1),
            Self::P2 => Some(Seat::P2),
        }
    }
    /// The outcome as seen from one seat.
    pub fn verdict(&self, seat: Seat) -> Verdict {
        match self.winner() {
            None => Verdict::Tie,
            Some(winner) if winner == seat => Verdict::Won,
            Some(_) => Verdict::Lost,
        }
    }
}

/// (player 1's move, player 2's move)
impl From<(Move, Move)> for Outcome {
    fn from((p1, p2): (Move, Move)) -> Self {
        if p1 == p2 {
            Self::Tie
        } else if p1.beats(&p2) {
            Self::P1
        } else {
            Self::P2
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.winner() {
            None => write!(f, "tie"),
            Some(seat) => write!(f, "{} wins", seat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn rock_crushes_scissors() {
        let outcome = Outcome::from((Move::Rock, Move::Scissors));
        assert_eq!(outcome, Outcome::P1);
        assert_eq!(outcome.verdict(Seat::P1), Verdict::Won);
        assert_eq!(outcome.verdict(Seat::P2), Verdict::Lost);
    }
    #[test]
    fn paper_paper_ties() {
        let outcome = Outcome::from((Move::Paper, Move::Paper));
        assert_eq!(outcome, Outcome::Tie);
        assert_eq!(outcome.verdict(Seat::P1), Verdict::Tie);
        assert_eq!(outcome.verdict(Seat::P2), Verdict::Tie);
    }
    #[test]
    fn scissors_lose_to_rock() {
        let outcome = Outcome::from((Move::Scissors, Move::Rock));
        assert_eq!(outcome, Outcome::P2);
        assert_eq!(outcome.verdict(Seat::P2), Verdict::Won);
    }
    #[test]
    fn equal_moves_tie() {
        for m in Move::ALL {
            assert_eq!(Outcome::from((m, m)), Outcome::Tie);
        }
    }
    #[test]
    fn swapping_players_mirrors() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(
                    Outcome::from((a, b)),
                    Outcome::from((b, a)).mirror(),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }
    #[test]
    fn verdicts_are_complementary() {
        for a in Move::ALL {
            for b in Move::ALL {
                let outcome = Outcome::from((a, b));
                let points = outcome.verdict(Seat::P1).points() + outcome.verdict(Seat::P2).points();
                assert!(points <= 1);
                assert_eq!(points == 0, outcome == Outcome::Tie);
            }
        }
    }
}
