//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: list the registered tools
//! - call: invoke one tool with JSON arguments
//! - docs: print the help resource

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Serpkit - Google Finance and Google Flights lookups over SerpAPI
#[derive(Parser, Debug)]
#[command(name = "serpkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available tools
    List {
        /// Print the tool definitions as JSON (MCP tools/list format)
        #[arg(long)]
        json: bool,
    },

    /// Call a tool and print its JSON result
    Call {
        /// Tool name, e.g. get_stock_quote
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,
    },

    /// Print the help resource
    Docs,
}
