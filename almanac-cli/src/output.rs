//! Output formatting for run results

use almanac_solver::{SolveError, SolveReport};
use chrono::TimeDelta;

/// Output formatter for part results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single part result
    pub fn print_result(&self, result: &Result<SolveReport, SolveError>) {
        match result {
            Ok(report) if self.quiet => println!("{}", report.answer),
            Ok(report) => println!(
                "Part {}: {} (solve: {})",
                report.part,
                report.answer,
                format_duration(report.duration())
            ),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print a summary after all results
    ///
    /// Shows parse time, summed solve time, and the actual elapsed
    /// wall-clock time (which can be shorter than the sum under the query
    /// fan-out).
    pub fn print_summary(
        &self,
        parse_duration: TimeDelta,
        results: &[Result<SolveReport, SolveError>],
    ) {
        if self.quiet {
            return;
        }

        let solved = results.iter().filter(|r| r.is_ok()).count();
        let failed = results.len() - solved;
        let total_solve_time: TimeDelta = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(SolveReport::duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", solved, failed);
        println!("Parse time: {}", format_duration(parse_duration));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {:.2?}",
            self.start_time.elapsed()
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_picks_sensible_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50s");
    }

    #[test]
    fn format_duration_negative() {
        assert_eq!(format_duration(TimeDelta::microseconds(-42)), "-42µs");
    }
}
