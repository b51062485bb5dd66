//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the work of a run is scheduled
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; solve each part in a single sequential pass
    Sequential,
    /// Fan each part's independent seed and range queries across the thread
    /// pool (default)
    #[default]
    Query,
}

/// Almanac range-remapper runner
#[derive(Parser, Debug)]
#[command(name = "almanac", about = "Resolve almanac seeds to locations", version)]
pub struct Args {
    /// Path to the almanac input file
    pub input: PathBuf,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential or query
    #[arg(long, value_enum, default_value = "query")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
