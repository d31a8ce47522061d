//! Build configurations and the command tokens the dispatcher understands.
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildConfig {
    Debug,
    #[default]
    Release,
}

impl BuildConfig {
    /// Matches the exact lowercase names accepted on the command line.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "debug" => Some(Self::Debug),
            "release" => Some(Self::Release),
            _ => None,
        }
    }

    /// Suffix appended to Gradle task names, e.g. `assembleDebug`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Build,
    Install,
    Uninstall,
    Start,
    Stop,
    Clean,
}

pub const COMMANDS: [(&str, Command); 6] = [
    ("build", Command::Build),
    ("install", Command::Install),
    ("uninstall", Command::Uninstall),
    ("start", Command::Start),
    ("stop", Command::Stop),
    ("clean", Command::Clean),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized command '{0}'")]
pub struct UnrecognizedCommand(pub String);

impl FromStr for Command {
    type Err = UnrecognizedCommand;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        COMMANDS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, command)| *command)
            .ok_or_else(|| UnrecognizedCommand(token.to_string()))
    }
}

impl Command {
    pub fn name(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }
}
