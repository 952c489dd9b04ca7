//! Command-line driver: prints π to the requested number of decimal digits.

use std::process::ExitCode;

use longnum::pi::{calculate_pi, decimal_to_binary_precision};

fn main() -> ExitCode {
    let Some(argument) = std::env::args().nth(1) else {
        eprintln!("Precision must be specified for the program to run");
        return ExitCode::FAILURE;
    };
    let precision = match argument.parse::<i64>() {
        Err(_) => {
            eprintln!("Invalid precision: {argument}");
            return ExitCode::FAILURE;
        }
        Ok(value) if value <= 0 => {
            eprintln!("Precision must be > 0");
            return ExitCode::FAILURE;
        }
        Ok(value) if value > i64::from(u32::MAX) => {
            eprintln!("Precision out of range: {argument}");
            return ExitCode::FAILURE;
        }
        Ok(value) => value as u32,
    };

    match calculate_pi(decimal_to_binary_precision(precision)) {
        Ok(pi) => {
            println!("{}", pi.to_decimal_string(precision));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Failed to calculate pi: {error}");
            ExitCode::FAILURE
        }
    }
}
