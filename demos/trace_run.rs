//! Trace Run
//!
//! Steps a fresh machine and prints the work tape, as a decimal integer,
//! after every step. This is the classic driver for the machine: with blank
//! tapes state 0 keeps writing 1s to the right, so the printed values are
//! 1, 3, 7, 15, ...
//!
//! Run with: cargo run --example trace_run -- [steps] [input-bits]
//! Set RUST_LOG=monotone=debug to see I/O events.

use monotone::config::parse_bits;
use monotone::{EngineBuilder, StepOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let steps: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 100,
    };
    let input = match args.next() {
        Some(bits) => parse_bits("input", &bits)?,
        None => Default::default(),
    };

    let mut engine = EngineBuilder::new().input_tape(input).build()?;

    for _ in 0..steps {
        if engine.step()? == StepOutcome::Halted {
            break;
        }
        println!("{}", engine.work_tape_value());
    }

    eprintln!(
        "state {} after {} steps; output: {:b} ({} bits emitted)",
        engine.state(),
        engine.steps_taken(),
        engine.output_tape_value(),
        engine.output_head()
    );

    Ok(())
}
