// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the devlop command-line interface.
//!
//! Three subcommands: `mode` reports how this build was configured, `check`
//! runs a single assertion and prints the failure it raised (if any), and
//! `includes` drives the deprecated demo helper so the one-time notice can be
//! seen in a terminal.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "devlop",
    about = "Development-only assertions and warn-once deprecations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the compiled mode and the resolved configuration
    Mode {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one assertion and report what it raised
    Check {
        /// Which assertion to run
        #[arg(value_enum)]
        operator: CheckOperator,

        /// Operands: the condition for `ok`, left and right for `equal`
        values: Vec<String>,

        /// Message to fail with instead of the default
        #[arg(short, long)]
        message: Option<String>,

        /// Error name to fail with (requires --message)
        #[arg(long, requires = "message")]
        name: Option<String>,

        /// Print the failure as JSON
        #[arg(long)]
        json: bool,
    },

    /// Call the deprecated `string_includes` helper
    Includes {
        /// Text to search in
        value: String,

        /// Text to search for
        search: String,

        /// Character position to start searching from
        #[arg(short, long)]
        position: Option<usize>,

        /// How many times to call it (the notice only appears once)
        #[arg(short, long, default_value = "1")]
        times: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CheckOperator {
    Ok,
    Equal,
    Unreachable,
}
