//! Terminal output formatting
//!
//! Option notation and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_simulation_result, print_solve_report,
};
pub use formatters::{OptionParseError, format_key, format_option, parse_attempt, parse_key};
