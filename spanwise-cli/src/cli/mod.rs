//! Command-line interface for the spanwise graph routines.
//!
//! Each subcommand reads an edge-list file, runs one core routine, and
//! returns a [`CommandOutput`] that [`render_output`] writes to stdout.

mod commands;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, CommandOutput, CycleCommand, MstCommand, MstSummary,
    OutputFormat, RoadsCommand, SummaryEdge, SummaryWeight, render_output, run_cli,
};
