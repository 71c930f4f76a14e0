use super::*;
use crate::Config;
use crate::Round;
use crate::Score;
use crate::players::Random;
use crate::rules::*;
use anyhow::Context;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Supervisor for a live match.
/// Wires six rendezvous links between the referee and the two players,
/// spawns the three actors, and keeps them running until interrupted.
///
/// Per player there are three links:
/// - turns: Referee → Player go signal
/// - moves: Player → Referee throw
/// - results: Referee → Player outcome
pub struct Room {
    pause: Duration,
    limit: Option<Round>,
    players: [Box<dyn Player>; crate::N],
}

impl Room {
    /// Seat two random players as configured.
    pub fn new(config: &Config) -> Self {
        let players = Seat::ALL.map(|seat| match config.seed {
            Some(seed) => Box::new(Random::seeded(seed, seat)) as Box<dyn Player>,
            None => Box::new(Random::new(seat)) as Box<dyn Player>,
        });
        Self::with(players)
            .pause(config.pause())
            .limit(config.rounds)
    }
    /// Seat the given players, player 1 first.
    pub fn with(players: [Box<dyn Player>; crate::N]) -> Self {
        Self {
            pause: crate::PAUSE,
            limit: None,
            players,
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
    /// Spawn the actors and hand back the running session.
    pub fn open(self) -> Session {
        let token = CancellationToken::new();
        let [p1, p2] = self.players;
        let (lane1, actor1) = Self::wire(Seat::P1, p1);
        let (lane2, actor2) = Self::wire(Seat::P2, p2);
        let players = [actor1.spawn(token.clone()), actor2.spawn(token.clone())];
        let referee = Referee::new(lane1, lane2)
            .pause(self.pause)
            .limit(self.limit)
            .spawn(token.clone());
        log::info!("[room] match open");
        Session {
            token,
            referee,
            players,
        }
    }
    /// Run the match until Ctrl-C, or until the round limit is reached.
    pub async fn run(self) -> anyhow::Result<Report> {
        let session = self.open();
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("listen for interrupt")?;
                log::info!("[room] interrupt received");
            }
            _ = session.finished() => {
                log::info!("[room] match finished");
            }
        }
        let report = session.close().await;
        println!("{}", Self::stopped());
        report
    }
}

impl Room {
    /// Printed once every actor has stopped, so it is always the last line.
    fn stopped() -> &'static str {
        "\nGame stopped."
    }
    fn wire(seat: Seat, player: Box<dyn Player>) -> (Lane, Actor) {
        let (turns, turns_rx) = link();
        let (moves_tx, moves) = link();
        let (results, results_rx) = link();
        let lane = Lane {
            turns,
            moves,
            results,
        };
        let actor = Actor::new(seat, player, turns_rx, moves_tx, results_rx);
        (lane, actor)
    }
}

/// Handles to a running match.
pub struct Session {
    token: CancellationToken,
    referee: JoinHandle<Tally>,
    players: [JoinHandle<Score>; crate::N],
}

impl Session {
    /// Resolves once the match has ended, by limit, hangup or cancellation.
    pub async fn finished(&self) {
        self.token.cancelled().await
    }
    /// Cancel every actor and collect their results, waiting at most
    /// [`crate::GRACE`] before aborting stragglers.
    pub async fn close(self) -> anyhow::Result<Report> {
        self.token.cancel();
        let aborts = std::iter::once(self.referee.abort_handle())
            .chain(self.players.iter().map(|h| h.abort_handle()))
            .collect::<Vec<_>>();
        let [p1, p2] = self.players;
        let referee = self.referee;
        let joined = tokio::time::timeout(crate::GRACE, async move {
            tokio::try_join!(referee, p1, p2)
        })
        .await;
        match joined {
            Ok(joined) => {
                let (tally, s1, s2) = joined.context("actor task failed")?;
                let report = Report {
                    tally,
                    scores: [s1, s2],
                };
                log::info!("[room] {}", report);
                Ok(report)
            }
            Err(_) => {
                aborts.iter().for_each(|h| h.abort());
                Err(anyhow::anyhow!(
                    "actors did not stop within {:?}",
                    crate::GRACE
                ))
            }
        }
    }
}

/// What a closed session leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub tally: Tally,
    pub scores: [Score; crate::N],
}

impl Report {
    pub fn score(&self, seat: Seat) -> Score {
        self.scores[seat.index()]
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; final scores {} {}, {} {}",
            self.tally,
            Seat::P1,
            self.score(Seat::P1),
            Seat::P2,
            self.score(Seat::P2)
        )
    }
}
