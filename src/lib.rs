//! An endless rock-paper-scissors match.
//!
//! Two player [`Actor`]s and a [`Referee`] run as independent tokio tasks
//! and talk only through rendezvous [`link`]s. Each round the referee
//! signals both players, collects their moves, adjudicates, and hands the
//! outcome back. The [`Room`] wires everything up and keeps the match
//! running until Ctrl-C.
//!
//! ## Modules
//!
//! - [`rules`] — moves, outcomes, seats and the dominance rule
//! - [`gameroom`] — links, actors and the supervising room
//! - [`players`] — concrete move strategies
//! - [`simulation`] — headless, seeded matches for statistics
//! - [`config`] — command line configuration
pub mod config;
pub mod gameroom;
pub mod players;
pub mod rules;
pub mod simulation;

pub use config::*;
pub use gameroom::*;
pub use players::*;
pub use rules::*;
pub use simulation::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round number, starting at 1.
pub type Round = u64;
/// A player's running count of won rounds.
pub type Score = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Pause between rounds.
pub const PAUSE: std::time::Duration = std::time::Duration::from_secs(1);
/// How long the room waits for actors to wind down after cancellation.
pub const GRACE: std::time::Duration = std::time::Duration::from_millis(500);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging. WARN and above go to the terminal so that game
/// output on stdout stays readable; when a directory is given, DEBUG and
/// above are also written to a timestamped file inside it.
#[cfg(feature = "server")]
pub fn log(dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir).context("create logs directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))
            .context("create log file")?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
