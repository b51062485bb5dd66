//! almanac - resolve almanac seeds through the range-remapping pipeline

mod cli;
mod error;
mod executor;
mod output;

use almanac_solver::AlmanacInstance;
use clap::Parser;
use cli::Args;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let formatter = OutputFormatter::new(args.quiet);

    let input = std::fs::read_to_string(&args.input)?;
    let instance = AlmanacInstance::new(&input)?;

    let executor = Executor::new(args.threads, args.parallelize_by)?;
    let results = executor.execute(&instance, args.part);

    for result in &results {
        formatter.print_result(result);
    }
    formatter.print_summary(instance.parse_duration(), &results);

    Ok(())
}
