//! tickdock library - replay driver for the tic-tac-toe rules engine.
//!
//! # Architecture
//!
//! - **CLI**: `clap` command definitions
//! - **Script**: TOML replay scripts and `x,y` move lists
//! - **Replay**: runs moves against a fresh [`tickdock_engine::GameEngine`]
//!   and renders the final state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod replay;
mod script;

pub use cli::{Cli, Command};
pub use replay::{
    OutputFormat, RejectedMove, ReplayOptions, ReplayReport, render, replay, rules_text,
};
pub use script::{ConfigError, ReplayScript, parse_moves};
