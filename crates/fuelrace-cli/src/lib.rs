//! Shared pieces of the `fuelrace` command-line front end.

pub mod output;
pub mod roster;
pub mod terminal;
