//! Connection Keepalive
//!
//! This example drops a simulated connection after a quiet period whose
//! length depends on what the connection is doing. Durations come from a
//! JSON configuration document.
//!
//! Key concepts:
//! - Loading a duration map from configuration
//! - Validating the map covers every state once, at startup
//! - Checked resets instead of panics
//!
//! Run with: RUST_LOG=debug cargo run --example connection_keepalive

use state_timer::{DurationMap, StateName, StateTimer, TimerError};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const HANDSHAKE: StateName = StateName::from_static("handshake");
const STREAMING: StateName = StateName::from_static("streaming");
const IDLE: StateName = StateName::from_static("idle");

const CONFIG: &str = r#"{
    "handshake": 20,
    "streaming": 40,
    "idle": 10
}"#;

fn main() -> Result<(), TimerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Connection Keepalive Example ===\n");

    let states: DurationMap<StateName> = DurationMap::from_json(CONFIG)?;
    states.ensure_covers([HANDSHAKE, STREAMING, IDLE])?;
    println!("Loaded durations: {states:?}");

    let mut timer = StateTimer::try_new(HANDSHAKE, states)?;

    // Each received packet moves the connection along and rearms the timer.
    for packet in ["hello", "data", "data", "data", "bye"] {
        std::thread::sleep(Duration::from_millis(5));
        let next = match packet {
            "hello" | "data" => STREAMING,
            _ => IDLE,
        };
        timer.try_reset(next)?;
        info!(packet, state = %timer.state(), "packet received");
    }

    // A state the configuration does not know is reported, not fatal.
    if let Err(err) = timer.try_reset(StateName::from("draining")) {
        println!("Rejected reset: {err}");
    }

    match timer.signal().recv_timeout(Duration::from_secs(1)) {
        Some(fired) => println!("Connection in state {} timed out at {fired}", timer.state()),
        None => println!("Connection still alive"),
    }
    timer.stop();

    println!("\n=== Example Complete ===");
    Ok(())
}
