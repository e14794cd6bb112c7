//! Cardinal Chains (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `cardinal_chains::{core,input,levels,term,types}` and hosts the
//! binary-side concerns: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use cardinal_chains_core as core;
pub use cardinal_chains_input as input;
pub use cardinal_chains_levels as levels;
pub use cardinal_chains_term as term;
pub use cardinal_chains_types as types;

pub use config::Config;
