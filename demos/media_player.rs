//! Media Player State Machine
//!
//! This example drives a small player through events, then walks the
//! history back and forth.
//!
//! Key concepts:
//! - Event-driven transitions loaded from JSON
//! - Undo/redo over visited states
//! - Reset that leaves history untouched
//! - Structured logging of every move via `tracing`
//!
//! Run with: RUST_LOG=debug cargo run --example media_player

use rewind::{FsmError, StateMachine};
use tracing_subscriber::EnvFilter;

const PLAYER: &str = r#"{
    "initial": "idle",
    "states": {
        "idle":    { "transitions": { "start": "running" } },
        "running": { "transitions": { "pause": "paused", "stop": "idle" } },
        "paused":  { "transitions": { "resume": "running" } }
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Media Player State Machine ===\n");

    let mut player = StateMachine::from_json(PLAYER)?;
    println!("Initial state: {}", player.state());

    player.trigger("start")?;
    player.trigger("pause")?;
    println!("After start, pause: {}", player.state());

    println!("\nUndo: {} -> {}", player.undo(), player.state());
    println!("Redo: {} -> {}", player.redo(), player.state());

    match player.trigger("stop") {
        Ok(()) => println!("Stopped"),
        Err(e) => println!("\nRejected: {e}"),
    }

    player.reset();
    println!("\nAfter reset: {}", player.state());
    println!("History survives reset: {:?}", player.history());

    let pausable: Vec<String> = player
        .states(Some("pause"))
        .into_iter()
        .map(ToString::to_string)
        .collect();
    println!("States that can pause: {pausable:?}");

    println!("\n=== Example Complete ===");
    Ok(())
}
