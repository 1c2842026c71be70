//! Command-line argument definitions and `LaunchRequest` construction.
use std::path::PathBuf;

use clap::Parser;

use crate::profile::KeepStrategy;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Start the script for Russian Fishing 4",
    long_about = None,
    after_help = "Without --pid the available profiles are listed and one is selected interactively (q quits)."
)]
pub struct LaunchArgs {
    /// The id of the profile you want to use.
    #[arg(short = 'p', long = "pid", allow_negative_numbers = true)]
    pub pid: Option<i64>,
    /// The current number of fish in your keepnet.
    #[arg(
        short = 'n',
        long = "fish-count",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub fish_count: i64,
    /// Keep all captured fish. This is already the default; --marked still wins.
    #[arg(short = 'a', long = "all", default_value_t = false)]
    pub all: bool,
    /// Keep only the marked fish. Wins over --all.
    #[arg(short = 'm', long = "marked", default_value_t = false)]
    pub marked: bool,
    /// Path to config.ini (overrides RF4_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

/// Selection state carried from the command line into resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchRequest {
    pub pid: Option<i64>,
    pub fish_count: i64,
    pub keep_strategy: KeepStrategy,
}

impl LaunchArgs {
    /// Build the `LaunchRequest` seen by the resolver.
    pub fn request(&self) -> LaunchRequest {
        LaunchRequest {
            pid: self.pid,
            fish_count: self.fish_count,
            keep_strategy: KeepStrategy::from_marked_flag(self.marked),
        }
    }
}
