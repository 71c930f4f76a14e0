use crate::Round;
use std::path::PathBuf;
use std::time::Duration;

/// Match configuration. With no flags the match is unbounded, paces
/// itself at one round per second, and seeds each player from the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(clap::Parser))]
#[cfg_attr(
    feature = "server",
    command(name = "roshambo", about = "An endless rock-paper-scissors match")
)]
pub struct Config {
    /// Seed both players' random streams for a reproducible match
    #[cfg_attr(feature = "server", arg(long))]
    pub seed: Option<u64>,
    /// Pause between rounds, in milliseconds
    #[cfg_attr(feature = "server", arg(long, default_value_t = crate::PAUSE.as_millis() as u64))]
    pub pause: u64,
    /// Stop after this many rounds
    #[cfg_attr(feature = "server", arg(long))]
    pub rounds: Option<Round>,
    /// Also write a debug log file into this directory
    #[cfg_attr(feature = "server", arg(long))]
    pub logs: Option<PathBuf>,
}

impl Config {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            pause: crate::PAUSE.as_millis() as u64,
            rounds: None,
            logs: None,
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use clap::Parser;
    #[test]
    fn no_flags_is_default() {
        let config = Config::try_parse_from(["roshambo"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pause(), crate::PAUSE);
    }
    #[test]
    fn flags() {
        let config = Config::try_parse_from([
            "roshambo", "--seed", "7", "--pause", "0", "--rounds", "100", "--logs", "logs",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pause(), Duration::ZERO);
        assert_eq!(config.rounds, Some(100));
        assert_eq!(config.logs, Some(PathBuf::from("logs")));
    }
    #[test]
    fn rejects_positional_arguments() {
        assert!(Config::try_parse_from(["roshambo", "extra"]).is_err());
    }
}
