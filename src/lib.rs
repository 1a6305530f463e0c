//! roster
//!
//! TUI application for managing a member table: load a JSON list once,
//! then search, page, select, edit and delete records in memory.
//!
//! Pure core (`model`, `parser`, `state`) with an impure shell (`source`,
//! `view`, `logging`).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
