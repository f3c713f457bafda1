//! Core library components.
//!
//! Configuration, the secret backend client, environment merging and the
//! compose invoker. Nothing in here prints to the terminal.

pub mod backend;
pub mod compose;
pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod validation;
