/// Why a hand-off on a link did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hangup {
    /// The other end of the link was dropped.
    Closed,
    /// The match was cancelled while waiting.
    Cancelled,
}

impl std::fmt::Display for Hangup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "link closed by peer"),
            Self::Cancelled => write!(f, "match cancelled"),
        }
    }
}

impl std::error::Error for Hangup {}
