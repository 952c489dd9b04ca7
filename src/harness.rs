//! A minimal test-registration and reporting harness.
//!
//! Probes are boolean-returning closures registered under a label; [`Tester::run_all`] runs every
//! probe in registration order, prints a PASSED/FAILED line per probe and a summary count, and
//! reports whether the whole group passed. A probe registered with [`Tester::register_error`]
//! passes exactly when it returns an error; everywhere else an error is a failure.

use core::fmt::Display;

const GREEN: u8 = 32;
const RED: u8 = 31;
const YELLOW: u8 = 33;

struct Probe<E> {
    probe: Box<dyn Fn() -> Result<bool, E>>,
    label: String,
    expect_error: bool,
}

/// A named group of registered probes.
pub struct Tester<E> {
    group_name: String,
    probes: Vec<Probe<E>>,
}

impl<E: Display> Tester<E> {
    pub fn new(group_name: impl Into<String>) -> Self {
        Tester { group_name: group_name.into(), probes: Vec::new() }
    }

    /// Registers a probe that passes when it returns `Ok(true)`.
    pub fn register(
        &mut self,
        probe: impl Fn() -> Result<bool, E> + 'static,
        label: impl Into<String>,
    ) {
        self.probes.push(Probe { probe: Box::new(probe), label: label.into(), expect_error: false });
    }

    /// Registers a probe that passes when it returns an error.
    pub fn register_error(
        &mut self,
        probe: impl Fn() -> Result<bool, E> + 'static,
        label: impl Into<String>,
    ) {
        self.probes.push(Probe { probe: Box::new(probe), label: label.into(), expect_error: true });
    }

    /// Runs every registered probe and returns whether all of them passed.
    pub fn run_all(&self) -> bool {
        println!("\n=========== Running [{}] ===========", self.group_name);
        if self.probes.is_empty() {
            println!("\n\x1b[1;{YELLOW}m[WARNING]\x1b[0m No probes were registered.");
            return true;
        }

        let mut passed = 0;
        for (index, probe) in self.probes.iter().enumerate() {
            let outcome = (probe.probe)();
            let success = match (&outcome, probe.expect_error) {
                (Ok(result), false) => *result,
                (Err(_), true) => true,
                _ => false,
            };
            if success {
                passed += 1;
                println!("{}) {}: \x1b[1;{GREEN}m[PASSED]\x1b[0m", index + 1, probe.label);
            } else {
                print!("{}) {}: \x1b[1;{RED}m[FAILED]\x1b[0m", index + 1, probe.label);
                match outcome {
                    Err(error) => println!(" ({error})"),
                    Ok(_) => println!(),
                }
            }
        }

        let total = self.probes.len();
        let percentage = passed as f32 / total as f32 * 100.0;
        let color = if passed == total {
            GREEN
        } else if passed == 0 {
            RED
        } else {
            YELLOW
        };
        println!("\x1b[1;{color}m\nTest results: {passed}/{total} {percentage:.2}%\x1b[0m");
        passed == total
    }
}
