//! Parity Recognizer
//!
//! This example loads a DFA accepting binary strings with an even number
//! of 1s, then decides a handful of inputs with live trace output.
//!
//! Key concepts:
//! - Loading an automaton from a JSON model
//! - Deep validation before the first run
//! - Completion on demand: the model only lists its 1-transitions
//! - Rejections are results, not errors
//!
//! Run with: RUST_LOG=debug cargo run --example parity

use dfakit::loader;
use dfakit::runner::{RunConfig, Runner};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const MODEL: &str = r#"{
    "name": "parity",
    "description": "binary strings with an even number of 1s",
    "alphabet": "01",
    "states": [
        {
            "name": "S0", "initial": true, "final": true,
            "recognitionMessage": "even number of 1s",
            "transitions": [
                { "symbol": "0", "destination": "S0" },
                { "symbol": "1", "destination": "S1" }
            ]
        },
        {
            "name": "S1", "initial": false, "final": false,
            "recognitionMessage": "odd number of 1s",
            "transitions": [{ "symbol": "1", "destination": "S0" }]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Parity Recognizer Example ===\n");

    let mut dfa = loader::parse(MODEL)?;
    print!("{dfa}");
    println!();

    let runner = Runner::new(
        RunConfig::new()
            .verbose(true)
            .delay(Duration::from_millis(100)),
    );

    for input in ["", "11", "1", "0110", "10", "02"] {
        let result = runner.run(&mut dfa, input)?;
        let verdict = if result.accepted { "accepted" } else { "rejected" };
        println!(
            "{:>6} -> {verdict} in {}\n",
            format!("{input:?}"),
            dfa.target_name(result.final_state)
        );
    }

    println!("=== Example Complete ===");
    Ok(())
}
