/// One of the two contestants.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    P1,
    P2,
}

impl Seat {
    pub const ALL: [Self; crate::N] = [Self::P1, Self::P2];

    pub fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}
