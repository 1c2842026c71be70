//! Command-line surface: flags, interactive prompting and console rendering.
pub mod args;
pub mod console;
pub mod resolver;

pub use args::{LaunchArgs, LaunchRequest};
pub use resolver::{resolve_profile, Resolution};
