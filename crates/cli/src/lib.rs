//! `incar-cli` -- command-line front end for `incar-core`.
//!
//! Prints the keyword registry for editor integration and validates JSON
//! input decks.

pub mod args;
pub mod commands;
pub mod deck;
