//! Terminal front-end for the Pong simulation
//!
//! Owns everything the simulation core does not: command line, log file,
//! terminal surface, keyboard and the frame-rate limited loop.

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod renderer;
