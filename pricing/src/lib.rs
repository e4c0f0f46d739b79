// Copyright (c) 2024 Botho Foundation

//! Campaign pricing command-line library.
//!
//! Loads pricing configuration and implements the commands of the
//! `campaign-pricing` binary on top of the `tier-pricing` engine.

#![deny(clippy::print_stdout)]

pub mod config;

// Re-export commands module for CLI binary
#[allow(clippy::print_stdout)]
pub mod commands;
