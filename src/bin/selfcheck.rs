//! Runs a small demonstration suite on the probe harness and exits non-zero on any failure.

use std::process::ExitCode;

use longnum::harness::Tester;
use longnum::{LongNumber, LongNumberError};

fn main() -> ExitCode {
    let mut success = true;

    let mut rendering: Tester<LongNumberError> = Tester::new("Rendering checks");
    rendering.register(
        || {
            let x = LongNumber::from_binary_str("10.10111", 3)?;
            Ok(x.to_binary_string() == "10.101")
        },
        "10.10111 -> 10.101",
    );
    rendering.register(
        || {
            let y = LongNumber::from_binary_str("10.11111", 3)?;
            Ok(y.to_binary_string() == "10.111")
        },
        "10.11111 -> 10.111",
    );
    rendering.register(
        || {
            let x = LongNumber::from_binary_str("10.101", 3)?;
            Ok(x.to_decimal_string(3) == "2.625")
        },
        "10.101 -> 2.625",
    );
    success &= rendering.run_all();

    let mut errors: Tester<LongNumberError> = Tester::new("Error checks");
    errors.register_error(
        || {
            LongNumber::from_binary_str("20.1", 3)?;
            Ok(true)
        },
        "Impossible digit (2) in whole part",
    );
    errors.register_error(
        || {
            LongNumber::from_binary_str("10.2", 3)?;
            Ok(true)
        },
        "Impossible digit (2) in fraction part",
    );
    errors.register_error(
        || {
            LongNumber::from_int(1, 0).try_div(&LongNumber::zero(0))?;
            Ok(true)
        },
        "Division by zero",
    );
    success &= errors.run_all();

    if success {
        ExitCode::SUCCESS
    } else {
        eprintln!("Some checks failed");
        ExitCode::FAILURE
    }
}
