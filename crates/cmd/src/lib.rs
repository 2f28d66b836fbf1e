//! Command implementations for the `reef` binary.
//!
//! Each command exposes a `*_command` printing wrapper over a
//! `*_command_as_string` variant so integration tests can capture output.

pub mod commands;
