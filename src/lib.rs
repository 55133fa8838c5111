//! Bike Dash (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! the binaries share: configuration, argument parsing, logging setup and the
//! headless simulation.

pub use bike_dash_core as core;
pub use bike_dash_engine as engine;
pub use bike_dash_input as input;
pub use bike_dash_term as term;
pub use bike_dash_types as types;

pub mod cli;
pub mod config;
pub mod logging;
pub mod summary;

pub use cli::{parse_args, Command, USAGE};
pub use config::Config;
pub use summary::{simulate, RunSummary};
