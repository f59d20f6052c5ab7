//! CLI module for serpkit - command-line interface and subcommands.
//!
//! A thin host over the tool executor: list tools, call one, print the docs.

pub mod commands;

pub use commands::Cli;
