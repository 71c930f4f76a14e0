use super::*;
use crate::Round;
use crate::rules::*;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Referee-side ends of the three links to one player.
#[derive(Debug)]
pub struct Lane {
    pub turns: Outbox<()>,
    pub moves: Inbox<Move>,
    pub results: Outbox<Outcome>,
}

/// Drives round sequencing and adjudicates outcomes.
///
/// Referee runs a loop starting at round 1:
/// - announce the round
/// - signal player 1, then player 2
/// - collect both moves
/// - adjudicate and send the outcome to both players
/// - pause, then move on to the next round
///
/// The loop is unbounded unless a round limit is set. Ending the match,
/// for whatever reason, cancels the token so the players stop with it.
#[derive(Debug)]
pub struct Referee {
    round: Round,
    limit: Option<Round>,
    pause: Duration,
    tally: Tally,
    p1: Lane,
    p2: Lane,
}

impl Referee {
    pub fn new(p1: Lane, p2: Lane) -> Self {
        Self {
            round: 1,
            limit: None,
            pause: crate::PAUSE,
            tally: Tally::default(),
            p1,
            p2,
        }
    }
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
    pub fn limit(mut self, limit: Option<Round>) -> Self {
        self.limit = limit;
        self
    }
    pub fn spawn(self, token: CancellationToken) -> JoinHandle<Tally> {
        tokio::spawn(self.run(token))
    }
    async fn run(mut self, token: CancellationToken) -> Tally {
        log::info!("[referee] match starts");
        while !self.finished() && !token.is_cancelled() {
            match self.officiate(&token).await {
                Ok(outcome) => self.tally.record(outcome),
                Err(e) => {
                    self.hangup(e, &token);
                    break;
                }
            }
            if let Err(e) = Self::rest(self.pause, &token).await {
                self.hangup(e, &token);
                break;
            }
            self.round += 1;
        }
        token.cancel();
        log::info!("[referee] {}", self.tally);
        self.tally
    }
}

impl Referee {
    async fn officiate(&mut self, token: &CancellationToken) -> Result<Outcome, Hangup> {
        println!("{}", self.header());
        self.p1.turns.give((), token).await?;
        self.p2.turns.give((), token).await?;
        let m1 = self.p1.moves.take(token).await?;
        let m2 = self.p2.moves.take(token).await?;
        let outcome = Outcome::from((m1, m2));
        log::debug!("[referee] round {}: {} vs {}, {}", self.round, m1, m2, outcome);
        self.p1.results.send(outcome).await?;
        self.p2.results.send(outcome).await?;
        Ok(outcome)
    }
    async fn rest(pause: Duration, token: &CancellationToken) -> Result<(), Hangup> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(Hangup::Cancelled),
            _ = tokio::time::sleep(pause) => Ok(()),
        }
    }
    fn header(&self) -> String {
        format!("\nRound {}", self.round)
    }
    fn finished(&self) -> bool {
        self.limit.is_some_and(|limit| self.round > limit)
    }
    fn hangup(&self, e: Hangup, token: &CancellationToken) {
        match token.is_cancelled() {
            true => log::debug!("[referee] {} in round {}", e, self.round),
            false => log::warn!("[referee] {} in round {}", e, self.round),
        }
    }
}
