use super::*;
use crate::Score;
use crate::rules::*;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Wrapper that runs a Player in its own async task.
/// Handles the hand-offs between Referee and Player implementation.
///
/// - Referee sends a go signal when a round starts
/// - Actor calls Player::decide and sends the move back to Referee
/// - Referee sends the Outcome of the round
/// - Actor scores it, prints a status line, and forwards the verdict to Player::notify
///
/// Once a move is handed over the round is committed: the outcome is
/// awaited without regard to cancellation, so a score is only ever
/// counted for a round the Referee has tallied.
pub struct Actor {
    seat: Seat,
    score: Score,
    player: Box<dyn Player>,
    turns: Inbox<()>,
    moves: Outbox<Move>,
    results: Inbox<Outcome>,
}

impl Actor {
    pub fn new(
        seat: Seat,
        player: Box<dyn Player>,
        turns: Inbox<()>,
        moves: Outbox<Move>,
        results: Inbox<Outcome>,
    ) -> Self {
        Self {
            seat,
            score: 0,
            player,
            turns,
            moves,
            results,
        }
    }
    /// Run until cancelled or hung up on, yielding the final score.
    pub fn spawn(self, token: CancellationToken) -> JoinHandle<Score> {
        tokio::spawn(self.run(token))
    }
    async fn run(mut self, token: CancellationToken) -> Score {
        loop {
            match self.play(&token).await {
                Ok(verdict) => println!("{}", self.status(verdict)),
                Err(e) if token.is_cancelled() => {
                    log::debug!("[{}] {} after match end", self.seat, e);
                    break;
                }
                Err(e) => {
                    log::warn!("[{}] {}", self.seat, e);
                    break;
                }
            }
        }
        log::info!("[{}] final score {}", self.seat, self.score);
        self.score
    }
    async fn play(&mut self, token: &CancellationToken) -> Result<Verdict, Hangup> {
        self.turns.take(token).await?;
        let choice = self.player.decide().await;
        log::debug!("[{}] throws {}", self.seat, choice);
        self.moves.give(choice, token).await?;
        let outcome = self.results.recv().await?;
        let verdict = outcome.verdict(self.seat);
        self.score += verdict.points();
        self.player.notify(&verdict).await;
        Ok(verdict)
    }
    fn status(&self, verdict: Verdict) -> String {
        format!("{}: {} Score: {}", self.seat, verdict, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Scripted;

    struct Bench {
        turns: Outbox<()>,
        moves: Inbox<Move>,
        results: Outbox<Outcome>,
    }

    fn seat(seat: Seat, script: &str) -> (Actor, Bench) {
        let (turns, turns_rx) = link();
        let (moves_tx, moves) = link();
        let (results, results_rx) = link();
        let player = Box::new(Scripted::try_from(script).unwrap());
        let actor = Actor::new(seat, player, turns_rx, moves_tx, results_rx);
        (actor, Bench { turns, moves, results })
    }

    #[tokio::test]
    async fn scores_only_wins() {
        let token = CancellationToken::new();
        let (actor, mut bench) = seat(Seat::P2, "rps");
        let handle = actor.spawn(token.clone());
        let mut scores = vec![];
        for outcome in [Outcome::P2, Outcome::Tie, Outcome::P1, Outcome::P2] {
            bench.turns.send(()).await.unwrap();
            bench.moves.recv().await.unwrap();
            bench.results.send(outcome).await.unwrap();
            scores.push(outcome.verdict(Seat::P2).points());
        }
        token.cancel();
        assert_eq!(handle.await.unwrap(), scores.iter().sum::<Score>());
        assert_eq!(scores, vec![1, 0, 0, 1]);
    }
    #[tokio::test]
    async fn throws_what_the_player_decides() {
        let token = CancellationToken::new();
        let (actor, mut bench) = seat(Seat::P1, "sp");
        let handle = actor.spawn(token.clone());
        let mut thrown = vec![];
        for _ in 0..3 {
            bench.turns.send(()).await.unwrap();
            thrown.push(bench.moves.recv().await.unwrap());
            bench.results.send(Outcome::Tie).await.unwrap();
        }
        token.cancel();
        assert_eq!(handle.await.unwrap(), 0);
        assert_eq!(thrown, vec![Move::Scissors, Move::Paper, Move::Scissors]);
    }
    #[tokio::test]
    async fn stops_when_referee_leaves() {
        let token = CancellationToken::new();
        let (actor, bench) = seat(Seat::P1, "r");
        let handle = actor.spawn(token);
        drop(bench);
        assert_eq!(handle.await.unwrap(), 0);
    }
    #[test]
    fn status_line() {
        let (mut actor, _) = seat(Seat::P1, "r");
        actor.score = 3;
        assert_eq!(actor.status(Verdict::Won), "Player 1: I won! Score: 3");
        assert_eq!(actor.status(Verdict::Lost), "Player 1: I lost. Score: 3");
        assert_eq!(actor.status(Verdict::Tie), "Player 1: Tie. Score: 3");
    }
}
