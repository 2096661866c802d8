//! Command-line interface for canvas_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe on a terminal canvas
#[derive(Parser, Debug)]
#[command(name = "canvas_tictactoe")]
#[command(about = "Two-player tic-tac-toe drawn on a terminal canvas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File that receives log output (the terminal is busy drawing the board)
    #[arg(long, global = true, default_value = "canvas_tictactoe.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["canvas_tictactoe"]).unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, PathBuf::from("canvas_tictactoe.log"));
    }

    #[test]
    fn test_config_command_with_file() {
        let cli =
            Cli::try_parse_from(["canvas_tictactoe", "config", "--config", "game.toml"]).unwrap();
        assert_eq!(cli.command(), Command::Config);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
