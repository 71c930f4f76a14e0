use crate::gameroom::*;
use crate::rules::*;

/// Player that replays a fixed sequence of moves, cycling forever.
/// An empty script always throws Rock.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    pub fn throw(&mut self) -> Move {
        let choice = self
            .moves
            .get(self.cursor % self.moves.len().max(1))
            .copied()
            .unwrap_or(Move::Rock);
        self.cursor += 1;
        choice
    }
}

impl From<Vec<Move>> for Scripted {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves, cursor: 0 }
    }
}

/// One letter per move, e.g. "rpss". Whitespace and commas are ignored.
impl TryFrom<&str> for Scripted {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Move::try_from(c.to_string().as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

#[async_trait::async_trait]
impl Player for Scripted {
    async fn decide(&mut self) -> Move {
        self.throw()
    }
    async fn notify(&mut self, _: &Verdict) {}
}
